//! Integration tests for the SQLite store: schema initialization and
//! insert-if-absent write semantics.

use sea_orm::EntityTrait;
use trendarr::db::Store;
use trendarr::entities::prelude::*;
use trendarr::models::content::{GenreRef, MovieRecord, TvShowRecord};

fn temp_db_url() -> String {
    let db_path = std::env::temp_dir().join(format!("trendarr-store-test-{}.db", uuid::Uuid::new_v4()));
    format!("sqlite:{}", db_path.display())
}

fn sample_movie(id: i64, title: &str) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        release_date: Some("2010-07-15".to_string()),
        popularity: 83.5,
        vote_average: 8.4,
        vote_count: 34_495,
        budget: 160_000_000,
        revenue: 825_532_764,
        genres: vec![
            GenreRef {
                id: 28,
                name: "Action".to_string(),
            },
            GenreRef {
                id: 878,
                name: "Science Fiction".to_string(),
            },
        ],
    }
}

fn sample_show(id: i64, name: &str) -> TvShowRecord {
    TvShowRecord {
        id,
        name: name.to_string(),
        first_air_date: Some("2011-04-17".to_string()),
        popularity: 369.6,
        vote_average: 8.4,
        vote_count: 21_857,
        genres: vec![GenreRef {
            id: 18,
            name: "Drama".to_string(),
        }],
    }
}

#[tokio::test]
async fn schema_initialization_is_idempotent() {
    let url = temp_db_url();

    // Empty store: initializing twice in a row must not raise.
    let store = Store::new(&url).await.unwrap();
    drop(store);
    let store = Store::new(&url).await.unwrap();

    store.record_movie(&sample_movie(27205, "Inception")).await.unwrap();
    store.record_tv_show(&sample_show(1399, "Game of Thrones")).await.unwrap();
    drop(store);

    // Populated store: re-initialization leaves existing rows untouched.
    let store = Store::new(&url).await.unwrap();
    let counts = store.table_counts().await.unwrap();
    assert_eq!(counts.movies, 1);
    assert_eq!(counts.tv_shows, 1);
    assert_eq!(counts.genres, 3);
    assert_eq!(counts.movie_genres, 2);
    assert_eq!(counts.tv_show_genres, 1);

    let movie = Movies::find_by_id(27205)
        .one(&store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(movie.title, "Inception");
}

#[tokio::test]
async fn insert_if_absent_never_refreshes_existing_rows() {
    let store = Store::new(&temp_db_url()).await.unwrap();

    let rows = store.record_movie(&sample_movie(27205, "Inception")).await.unwrap();
    assert_eq!(rows.content, 1);
    assert_eq!(rows.genres, 2);
    assert_eq!(rows.links, 2);

    // Same id, different field values: the stored row must not change.
    let mut changed = sample_movie(27205, "Inception (remastered)");
    changed.revenue = 0;
    let rows = store.record_movie(&changed).await.unwrap();
    assert_eq!(rows.content, 0);
    assert_eq!(rows.genres, 0);
    assert_eq!(rows.links, 0);

    let movie = Movies::find_by_id(27205)
        .one(&store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.revenue, 825_532_764);
}

#[tokio::test]
async fn shared_genres_are_written_once() {
    let store = Store::new(&temp_db_url()).await.unwrap();

    store.record_movie(&sample_movie(27205, "Inception")).await.unwrap();
    let rows = store.record_movie(&sample_movie(603, "The Matrix")).await.unwrap();

    // Both genres already existed; only the new movie and its links landed.
    assert_eq!(rows.content, 1);
    assert_eq!(rows.genres, 0);
    assert_eq!(rows.links, 2);

    let counts = store.table_counts().await.unwrap();
    assert_eq!(counts.movies, 2);
    assert_eq!(counts.genres, 2);
    assert_eq!(counts.movie_genres, 4);
}

#[tokio::test]
async fn tv_show_rows_round_trip() {
    let store = Store::new(&temp_db_url()).await.unwrap();

    store.record_tv_show(&sample_show(1399, "Game of Thrones")).await.unwrap();

    let show = TvShows::find_by_id(1399)
        .one(&store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(show.name, "Game of Thrones");
    assert_eq!(show.first_air_date.as_deref(), Some("2011-04-17"));
    assert_eq!(show.vote_count, 21_857);

    let genres = store.list_genres().await.unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].genre_name, "Drama");
}

#[tokio::test]
async fn ping_succeeds_on_open_store() {
    let store = Store::new(&temp_db_url()).await.unwrap();
    store.ping().await.unwrap();
}
