use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet, Order,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
    sea_query::{Expr, NullOrdering},
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{Movie, MovieDetails, MovieReview},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every movie, highest rating first. Unrated movies come last; ties keep insertion order.
    pub async fn list_by_rating(&self) -> AppResult<Vec<Movie>> {
        let movies = movie::Entity::find()
            .order_by_with_nulls(movie::Column::Rating, Order::Desc, NullOrdering::Last)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<Movie>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn insert(&self, details: MovieDetails) -> AppResult<Movie> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(details.title.clone()),
            year: Set(details.year),
            description: Set(details.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(details.img_url),
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::ConstraintViolation(details.title))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update(&self, id: i32, review: MovieReview) -> AppResult<Movie> {
        let Some(existing) = self.get(id).await? else {
            return Err(AppError::NotFound(id));
        };

        let mut model = existing.into_active_model();
        model.rating = Set(Some(review.rating));
        model.review = Set(Some(review.review));
        Ok(model.update(&self.db).await?)
    }

    /// Returns whether a movie was removed. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn save_rankings(&self, rankings: &[(i32, i32)]) -> AppResult<()> {
        if rankings.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await?;
        for &(id, ranking) in rankings {
            movie::Entity::update_many()
                .col_expr(movie::Column::Ranking, Expr::value(ranking))
                .filter(movie::Column::Id.eq(id))
                .exec(&txn)
                .await?;
        }
        txn.commit().await?;

        Ok(())
    }
}
