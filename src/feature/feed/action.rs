use crate::net::feed::ClapDto;
use crate::net::NetworkError;
use crate::store::Action;

#[derive(Debug)]
pub enum FeedAction {
    /// Copy the card's text. The parent writes the pasteboard and shows the
    /// confirmation toast.
    CopyTapped { text: String },
    /// Open the action sheet for this card (parent presents it).
    MoreTapped,
    ClapTapped,
    ClapDone(Result<ClapDto, NetworkError>),
    AudioTapped,
}

impl Action for FeedAction {}
