pub mod prelude;

pub mod genres;
pub mod movie_genres;
pub mod movies;
pub mod tv_show_genres;
pub mod tv_shows;
