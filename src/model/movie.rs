use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
}

impl Movie {
    pub fn to_csvable_array(&self) -> Vec<String> {
        return vec![
            self.id.clone(),
            self.title.clone(),
            self.director.clone(),
            self.year.to_string(),
            self.genre.clone(),
        ];
    }

    pub fn csv_titles() -> Vec<&'static str> {
        return vec!["ID", "Title", "Director", "Year", "Genre"];
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}\nTitle: {}\nDirector: {}\nYear: {}\nGenre: {}",
            self.id, self.title, self.director, self.year, self.genre
        )
    }
}
