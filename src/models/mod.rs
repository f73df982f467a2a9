pub mod cell;
pub mod column;
pub mod event;
pub mod group;
pub mod row;
pub mod settings;
pub mod timeline_row;
pub mod view;

pub use cell::CellValue;
pub use column::{Column, ColumnKind};
pub use event::Event;
pub use group::Group;
pub use row::TableRow;
pub use settings::{RecordEndType, ViewSettings};
pub use timeline_row::TimelineRow;
