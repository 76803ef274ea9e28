//! Profile endpoints: availability checks, sign-up, fetch and update.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::model::Profile;
use crate::net::request::ApiRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub nickname: String,
    pub archive_name: String,
    pub profile_image_url: String,
    #[serde(default)]
    pub post_count: u32,
}

impl From<ProfileDto> for Profile {
    fn from(dto: ProfileDto) -> Self {
        Profile {
            id: dto.id,
            nickname: dto.nickname,
            archive_name: dto.archive_name,
            profile_image_url: dto.profile_image_url,
            post_count: dto.post_count,
        }
    }
}

/// `true` means the name is free to take.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AvailabilityDto {
    pub available: bool,
}

pub struct NicknameAvailabilityRequest {
    pub nickname: String,
}

impl ApiRequest for NicknameAvailabilityRequest {
    type Response = AvailabilityDto;

    fn path(&self) -> String {
        "/profile/nickname/availability".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("nickname", self.nickname.clone())]
    }
}

pub struct ArchiveNameAvailabilityRequest {
    pub archive_name: String,
}

impl ApiRequest for ArchiveNameAvailabilityRequest {
    type Response = AvailabilityDto;

    fn path(&self) -> String {
        "/profile/archive/availability".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("archiveName", self.archive_name.clone())]
    }
}

pub struct FetchProfileRequest;

impl ApiRequest for FetchProfileRequest {
    type Response = ProfileDto;

    fn path(&self) -> String {
        "/profile".to_string()
    }
}

pub struct SignUpRequest {
    pub identifier: String,
    pub nickname: String,
    pub archive_name: String,
    pub profile_image_url: String,
}

impl ApiRequest for SignUpRequest {
    type Response = ProfileDto;

    fn path(&self) -> String {
        "/profile/signup".to_string()
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(json!({
            "identifier": self.identifier,
            "nickname": self.nickname,
            "archiveName": self.archive_name,
            "profileImageUrl": self.profile_image_url,
        }))
    }
}

pub struct UpdateProfileRequest {
    pub nickname: String,
    pub archive_name: String,
    pub profile_image_url: String,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = ProfileDto;

    fn path(&self) -> String {
        "/profile".to_string()
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(json!({
            "nickname": self.nickname,
            "archiveName": self.archive_name,
            "profileImageUrl": self.profile_image_url,
        }))
    }
}
