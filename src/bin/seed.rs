// src/bin/seed.rs
//
// Populates the quiz database with a fixed set of general-knowledge
// questions. Clears all existing data first (FK-safe order), then inserts
// each question with its 1 correct + 3 wrong answers in shuffled order.

use dotenvy::dotenv;
use quiz_backend::config::Config;
use quiz_backend::db;
use rand::seq::SliceRandom;
use sqlx::SqlitePool;

struct SampleQuestion {
    text: &'static str,
    correct: &'static str,
    wrong: [&'static str; 3],
}

const SAMPLE_QUESTIONS: &[SampleQuestion] = &[
    SampleQuestion {
        text: "What is the capital of France?",
        correct: "Paris",
        wrong: ["London", "Berlin", "Rome"],
    },
    SampleQuestion {
        text: "Which planet is known as the Red Planet?",
        correct: "Mars",
        wrong: ["Jupiter", "Venus", "Saturn"],
    },
    SampleQuestion {
        text: "What is the largest ocean on Earth?",
        correct: "Pacific Ocean",
        wrong: ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean"],
    },
    SampleQuestion {
        text: "Who wrote 'Hamlet'?",
        correct: "William Shakespeare",
        wrong: ["Charles Dickens", "Leo Tolstoy", "Mark Twain"],
    },
    SampleQuestion {
        text: "What is the smallest prime number?",
        correct: "2",
        wrong: ["1", "3", "0"],
    },
    SampleQuestion {
        text: "Which gas do plants absorb from the atmosphere?",
        correct: "Carbon Dioxide",
        wrong: ["Oxygen", "Hydrogen", "Nitrogen"],
    },
    SampleQuestion {
        text: "Which element has the chemical symbol 'O'?",
        correct: "Oxygen",
        wrong: ["Gold", "Osmium", "Zinc"],
    },
    SampleQuestion {
        text: "What is the freezing point of water?",
        correct: "0°C",
        wrong: ["100°C", "32°C", "10°C"],
    },
    SampleQuestion {
        text: "Which language is primarily spoken in Brazil?",
        correct: "Portuguese",
        wrong: ["Spanish", "French", "English"],
    },
    SampleQuestion {
        text: "What is the currency of Japan?",
        correct: "Yen",
        wrong: ["Won", "Dollar", "Peso"],
    },
];

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let config = Config::from_env();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open database");

    db::migrate(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Seeding database...");

    if let Err(e) = seed(&pool).await {
        tracing::error!("Error seeding database: {:?}", e);
        std::process::exit(1);
    }

    tracing::info!("Database seeded successfully!");
}

async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Clear tables (order matters due to foreign keys)
    sqlx::query("DELETE FROM submission_answers").execute(pool).await?;
    sqlx::query("DELETE FROM submissions").execute(pool).await?;
    sqlx::query("DELETE FROM answers").execute(pool).await?;
    sqlx::query("DELETE FROM questions").execute(pool).await?;

    let mut rng = rand::thread_rng();

    for question in SAMPLE_QUESTIONS {
        let question_id: i64 =
            sqlx::query_scalar("INSERT INTO questions (text) VALUES (?) RETURNING id")
                .bind(question.text)
                .fetch_one(pool)
                .await?;

        // 1 correct + 3 wrong answers in shuffled order
        let mut answers: Vec<(&str, bool)> =
            question.wrong.iter().map(|text| (*text, false)).collect();
        answers.push((question.correct, true));
        answers.shuffle(&mut rng);

        for (text, is_correct) in answers {
            sqlx::query("INSERT INTO answers (question_id, text, is_correct) VALUES (?, ?, ?)")
                .bind(question_id)
                .bind(text)
                .bind(is_correct)
                .execute(pool)
                .await?;
        }
    }

    Ok(())
}
