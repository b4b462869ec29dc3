use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;

use crate::model::types::*;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub db: Db,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub async fn new(leptos_options: LeptosOptions) -> Result<Self, Error> {
        if dotenvy::dotenv().is_err() {
            eprintln!("didn't find env file")
        };
        let db_url = std::env::var("DATABASE_URL")?;
        let db = Db::new(db_url).await?;
        Ok(Self { db, leptos_options })
    }
}
