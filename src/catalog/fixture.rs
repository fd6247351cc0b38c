use crate::domain::Film;

fn film(title: &str, author: &str, co_author: &[&str], release_date: i32) -> Film {
    Film {
        title: title.to_string(),
        author: author.to_string(),
        co_author: co_author.iter().map(|s| s.to_string()).collect(),
        release_date,
    }
}

/// Sample catalog served by `getFilms`
pub fn sample_films() -> Vec<Film> {
    vec![
        film("Inception", "Christopher Nolan", &["Emma Thomas"], 2010),
        film("Interstellar", "Christopher Nolan", &["Jonathan Nolan", "Emma Thomas"], 2014),
        film("Dunkirk", "Christopher Nolan", &[], 2017),
        film("Spirited Away", "Hayao Miyazaki", &["Toshio Suzuki"], 2001),
        film("My Neighbor Totoro", "Hayao Miyazaki", &[], 1988),
        film("Pulp Fiction", "Quentin Tarantino", &["Roger Avary"], 1994),
        film("Jackie Brown", "Quentin Tarantino", &[], 1997),
        film("Arrival", "Denis Villeneuve", &["Eric Heisserer"], 2016),
        film("The Grand Budapest Hotel", "Wes Anderson", &["Hugo Guinness"], 2014),
        film("Cidade de Deus", "Fernando Meirelles", &["Kátia Lund"], 2002),
    ]
}
