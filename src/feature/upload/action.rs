use crate::net::feed::FeedDto;
use crate::net::image::UploadedImageDto;
use crate::net::NetworkError;
use crate::store::Action;

#[derive(Debug)]
pub enum UploadAction {
    ImageSelected(Vec<u8>),
    ImageUploaded(Result<UploadedImageDto, NetworkError>),
    ContentChanged { index: usize, content: String },
    ItemRemoved { index: usize },
    SubmitTapped,
    Submitted(Result<FeedDto, NetworkError>),
}

impl Action for UploadAction {}
