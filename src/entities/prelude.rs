pub use super::genres::Entity as Genres;
pub use super::movie_genres::Entity as MovieGenres;
pub use super::movies::Entity as Movies;
pub use super::tv_show_genres::Entity as TvShowGenres;
pub use super::tv_shows::Entity as TvShows;
