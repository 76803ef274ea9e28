//! Feed endpoints: listing, reactions, deletion and post creation.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::model::{Author, Feed, TextImage};
use crate::net::request::ApiRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub nickname: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextImageDto {
    pub id: u64,
    pub image_url: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDto {
    pub id: u64,
    pub author: AuthorDto,
    pub upload_time: String,
    pub text_images: Vec<TextImageDto>,
    pub clap_count: u32,
    #[serde(default)]
    pub is_clapped: bool,
}

impl From<FeedDto> for Feed {
    fn from(dto: FeedDto) -> Self {
        Feed {
            id: dto.id,
            author: Author {
                nickname: dto.author.nickname,
                image_url: dto.author.image_url,
            },
            upload_time: dto.upload_time,
            text_images: dto
                .text_images
                .into_iter()
                .map(|t| TextImage {
                    id: t.id,
                    image_url: t.image_url,
                    text: t.text,
                })
                .collect(),
            clap_count: dto.clap_count,
            is_clapped: dto.is_clapped,
        }
    }
}

pub struct FetchFeedsRequest;

impl ApiRequest for FetchFeedsRequest {
    type Response = Vec<FeedDto>;

    fn path(&self) -> String {
        "/feeds".to_string()
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClapDto {
    pub clap_count: u32,
}

pub struct ClapFeedRequest {
    pub feed_id: u64,
}

impl ApiRequest for ClapFeedRequest {
    type Response = ClapDto;

    fn path(&self) -> String {
        format!("/post/{}/clap", self.feed_id)
    }

    fn method(&self) -> Method {
        Method::POST
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeletedDto {
    pub deleted: bool,
}

pub struct DeleteFeedRequest {
    pub feed_id: u64,
}

impl ApiRequest for DeleteFeedRequest {
    type Response = DeletedDto;

    fn path(&self) -> String {
        format!("/post/{}", self.feed_id)
    }

    fn method(&self) -> Method {
        Method::DELETE
    }
}

/// One page of a new post: the uploaded image plus its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostItem {
    pub image_url: String,
    pub content: String,
}

pub struct CreatePostRequest {
    pub items: Vec<PostItem>,
}

impl ApiRequest for CreatePostRequest {
    type Response = FeedDto;

    fn path(&self) -> String {
        "/post/create".to_string()
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(json!({
            "items": self
                .items
                .iter()
                .map(|item| {
                    json!({
                        "imageUrl": item.image_url,
                        "content": item.content,
                    })
                })
                .collect::<Vec<_>>(),
        }))
    }
}
