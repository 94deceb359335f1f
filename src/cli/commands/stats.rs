//! Stats command handler - row counts for the collected tables.

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_stats(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let counts = store.table_counts().await?;

    println!("Collected catalog ({})", config.general.database_path);
    println!("{:-<40}", "");
    println!("movies:         {:>8}", counts.movies);
    println!("tv_shows:       {:>8}", counts.tv_shows);
    println!("genres:         {:>8}", counts.genres);
    println!("movie_genres:   {:>8}", counts.movie_genres);
    println!("tv_show_genres: {:>8}", counts.tv_show_genres);

    let genres = store.list_genres().await?;
    if !genres.is_empty() {
        println!();
        println!(
            "Genres: {}",
            genres
                .iter()
                .map(|g| g.genre_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
