/// Author summary shown on a feed card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    pub nickname: String,
    pub image_url: String,
}

/// One text-over-image page of a post.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextImage {
    pub id: u64,
    pub image_url: String,
    pub text: String,
}

/// A post in the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feed {
    pub id: u64,
    pub author: Author,
    pub upload_time: String,
    pub text_images: Vec<TextImage>,
    pub clap_count: u32,
    pub is_clapped: bool,
}
