/// A user's profile as rendered in settings and the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub id: String,
    pub nickname: String,
    pub archive_name: String,
    pub profile_image_url: String,
    pub post_count: u32,
}
