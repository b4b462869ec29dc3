use crate::model::types::*;

/// Reads both counter rows into a single tally.
pub async fn get_tally<'e>(executor: impl sqlx::PgExecutor<'e>) -> Result<VoteTally, Error> {
    let rows: Vec<(String, i64)> = sqlx::query_as("SELECT candidate, votes FROM tallies")
        .fetch_all(executor)
        .await?;

    let mut tally = VoteTally::default();
    for (candidate, votes) in rows {
        match candidate.parse::<Candidate>() {
            Ok(Candidate::Barbie) => tally.barbie = votes.max(0) as u64,
            Ok(Candidate::Oppenheimer) => tally.oppenheimer = votes.max(0) as u64,
            Err(_) => tracing::warn!("skipping unknown candidate row: {}", candidate),
        }
    }
    Ok(tally)
}

/// Counts one vote and returns the updated totals.
pub async fn add_vote(candidate: Candidate, pool: &sqlx::PgPool) -> Result<VoteTally, Error> {
    let result = sqlx::query("UPDATE tallies SET votes = votes + 1 WHERE candidate = $1")
        .bind(candidate.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::InvalidRequest(format!(
            "no tally row for candidate {}",
            candidate
        )));
    }

    tracing::info!("vote cast for {}", candidate);
    get_tally(pool).await
}
