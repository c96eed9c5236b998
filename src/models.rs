use serde::Deserialize;

pub use crate::entities::movie::Model as Movie;

/// A provider search hit that has not been imported yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub provider_id: i64,
    pub title: String,
    pub release_date: Option<String>,
}

/// Fields needed to create a record, as mapped from the provider's detail payload.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovieReview {
    pub rating: f64,
    pub review: String,
}

pub const MAX_RATING: f64 = 10.0;

#[derive(Debug, Default, Deserialize)]
pub struct AddMovieForm {
    #[serde(default)]
    pub title: String,
}

impl AddMovieForm {
    /// Returns the trimmed title, or the message to show next to the field.
    pub fn validate(&self) -> Result<&str, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Please enter a movie title.");
        }
        Ok(title)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditMovieForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct EditErrors {
    pub rating: Option<&'static str>,
    pub review: Option<&'static str>,
}

impl EditMovieForm {
    pub fn validate(&self) -> Result<MovieReview, EditErrors> {
        let mut errors = EditErrors::default();

        let rating = self.rating.trim();
        let parsed = if rating.is_empty() {
            errors.rating = Some("Please enter a rating.");
            None
        } else {
            match rating.parse::<f64>() {
                Ok(value) if (0.0..=MAX_RATING).contains(&value) => Some(value),
                Ok(_) => {
                    errors.rating = Some("Rating must be between 0 and 10.");
                    None
                }
                Err(_) => {
                    errors.rating = Some("Rating must be a number, e.g. 7.5.");
                    None
                }
            }
        };

        let review = self.review.trim();
        if review.is_empty() {
            errors.review = Some("Please enter a review.");
        }

        match parsed {
            Some(rating) if errors.review.is_none() => {
                Ok(MovieReview { rating, review: review.to_string() })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(rating: &str, review: &str) -> EditMovieForm {
        EditMovieForm { rating: rating.to_string(), review: review.to_string() }
    }

    #[test]
    fn add_form_requires_a_title() {
        assert!(AddMovieForm { title: "   ".to_string() }.validate().is_err());
        assert_eq!(AddMovieForm { title: " Dune ".to_string() }.validate(), Ok("Dune"));
    }

    #[test]
    fn edit_form_parses_decimal_rating() {
        let review = edit("9.5", " Great ").validate().unwrap();
        assert_eq!(review, MovieReview { rating: 9.5, review: "Great".to_string() });
    }

    #[test]
    fn edit_form_rejects_non_numeric_rating() {
        let errors = edit("abc", "Great").validate().unwrap_err();
        assert!(errors.rating.is_some());
        assert!(errors.review.is_none());
    }

    #[test]
    fn edit_form_rejects_out_of_range_and_nan() {
        assert!(edit("10.5", "ok").validate().is_err());
        assert!(edit("-1", "ok").validate().is_err());
        assert!(edit("NaN", "ok").validate().is_err());
        assert!(edit("10", "ok").validate().is_ok());
        assert!(edit("0", "ok").validate().is_ok());
    }

    #[test]
    fn edit_form_requires_both_fields() {
        let errors = edit("", "").validate().unwrap_err();
        assert!(errors.rating.is_some());
        assert!(errors.review.is_some());
    }
}
