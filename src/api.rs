use gloo_net::http::Request;

use crate::error::ApiError;
use crate::types::{Post, PostDraft};

fn collection_url(base_url: &str) -> String {
    format!("{}/posts", base_url.trim_end_matches('/'))
}

fn item_url(base_url: &str, id: i64) -> String {
    format!("{}/posts/{}", base_url.trim_end_matches('/'), id)
}

fn checked(response: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

pub async fn fetch_posts(base_url: &str) -> Result<Vec<Post>, ApiError> {
    let response = checked(Request::get(&collection_url(base_url)).send().await?)?;

    Ok(response.json().await?)
}

pub async fn create_post(base_url: &str, draft: &PostDraft) -> Result<(), ApiError> {
    checked(
        Request::post(&collection_url(base_url))
            .json(draft)?
            .send()
            .await?,
    )?;

    Ok(())
}

pub async fn update_post(base_url: &str, id: i64, draft: &PostDraft) -> Result<(), ApiError> {
    checked(
        Request::put(&item_url(base_url, id))
            .json(draft)?
            .send()
            .await?,
    )?;

    Ok(())
}

pub async fn delete_post(base_url: &str, id: i64) -> Result<(), ApiError> {
    checked(Request::delete(&item_url(base_url, id)).send().await?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_appends_posts() {
        assert_eq!(
            collection_url("http://localhost:5002/api"),
            "http://localhost:5002/api/posts"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        assert_eq!(
            collection_url("http://localhost:5002/api/"),
            "http://localhost:5002/api/posts"
        );
        assert_eq!(
            item_url("http://localhost:5002/api/", 7),
            "http://localhost:5002/api/posts/7"
        );
    }

    #[test]
    fn item_url_targets_a_single_post() {
        assert_eq!(
            item_url("https://example.com/api", 42),
            "https://example.com/api/posts/42"
        );
    }
}
