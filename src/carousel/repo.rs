use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Image record in the `carouselimages` table. Public, no ownership.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarouselImage {
    pub id: i64,
    pub imgurl: String,
    pub maker: String,
}

pub async fn insert(db: &PgPool, imgurl: &str, maker: &str) -> Result<CarouselImage, sqlx::Error> {
    sqlx::query_as::<_, CarouselImage>(
        r#"
        INSERT INTO carouselimages (imgurl, maker)
        VALUES ($1, $2)
        RETURNING id, imgurl, maker
        "#,
    )
    .bind(imgurl)
    .bind(maker)
    .fetch_one(db)
    .await
}

pub async fn list_all(db: &PgPool) -> Result<Vec<CarouselImage>, sqlx::Error> {
    sqlx::query_as::<_, CarouselImage>(
        r#"
        SELECT id, imgurl, maker
        FROM carouselimages
        "#,
    )
    .fetch_all(db)
    .await
}
