use axum::{extract::State, http::StatusCode, routing::post, Router};
use tracing::{info, instrument, warn};

use crate::{
    carousel::{
        dto::AddImageRequest,
        repo::{self, CarouselImage},
    },
    error::ApiError,
    extract::Json,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/carouselimages", post(add_image).get(list_images))
}

#[instrument(skip(state, payload))]
pub async fn add_image(
    State(state): State<AppState>,
    Json(payload): Json<AddImageRequest>,
) -> Result<(StatusCode, Json<CarouselImage>), ApiError> {
    if payload.imgurl.is_empty() || payload.maker.is_empty() {
        warn!("add image with missing fields");
        return Err(ApiError::Validation("Imgurl and maker are required".into()));
    }

    let image = repo::insert(&state.db, &payload.imgurl, &payload.maker).await?;
    info!(image_id = %image.id, "carousel image added");
    Ok((StatusCode::CREATED, Json(image)))
}

#[instrument(skip(state))]
pub async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarouselImage>>, ApiError> {
    let rows = repo::list_all(&state.db).await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_image_rejects_missing_fields() {
        let state = AppState::fake();
        let payload = AddImageRequest {
            imgurl: "".into(),
            maker: "Jane Doe".into(),
        };
        let err = add_image(State(state.clone()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let payload = AddImageRequest {
            imgurl: "https://cdn.example.com/a.jpg".into(),
            maker: "".into(),
        };
        let err = add_image(State(state), Json(payload)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn image_serializes_all_fields() {
        let json = serde_json::to_value(CarouselImage {
            id: 4,
            imgurl: "https://cdn.example.com/a.jpg".into(),
            maker: "Jane Doe".into(),
        })
        .unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["imgurl"], "https://cdn.example.com/a.jpg");
        assert_eq!(json["maker"], "Jane Doe");
    }
}
