use chrono::{Duration, Utc};
use mongodb::bson::doc;
use mongodb::bson::Document;
use mongodb::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let database_uri =
        std::env::var("API_DATABASE_URI").expect("API_DATABASE_URI must be set");
    let database_name =
        std::env::var("API_DATABASE_NAME").unwrap_or_else(|_| "fsr".to_string());

    let client = Client::with_uri_str(&database_uri).await?;
    let collection = client.database(&database_name).collection::<Document>("readings");

    println!("Seeding database with test readings...");

    // One reading every 15 minutes over the last 24 hours, with values that
    // sweep across all five pressure bands.
    let now = Utc::now();
    let mut current_time = now - Duration::hours(24);

    for i in 0..100i64 {
        let fsr = (i * 37) % 3000;
        collection
            .insert_one(
                doc! {
                    "fsr": fsr,
                    "timestamp": current_time.to_rfc3339(),
                    "createdAt": mongodb::bson::DateTime::from_chrono(current_time),
                },
                None,
            )
            .await?;

        current_time += Duration::minutes(15);
    }

    println!("Successfully seeded database with 100 readings!");
    Ok(())
}
