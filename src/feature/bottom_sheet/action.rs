use crate::store::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomSheetAction {
    EditTapped,
    DeleteTapped,
    ReportTapped,
}

impl Action for BottomSheetAction {}
