//! Built-in components, from single controls up to the application shell.

pub mod icon;
pub mod label;
pub mod button;
pub mod link;
pub mod input;
pub mod number_input;
pub mod toggle;
pub mod datetime;
pub mod select;
pub mod toast;
pub mod spinner;
pub mod upload;
pub mod pagination;
pub mod table;
pub mod selector;
pub mod field;
pub mod row;
pub mod editor;
pub mod list;
pub mod search;
pub mod form;
pub mod sidebar;
pub mod menubar;
pub mod inputbox;
pub mod application;

pub use icon::Icon;
pub use label::Label;
pub use button::{Button, ButtonStyle, ButtonType};
pub use link::{Link, LinkStyle};
pub use input::{Input, InputType};
pub use number_input::NumberInput;
pub use toggle::Toggle;
pub use datetime::{DateTime, DateTimeType};
pub use select::{Select, SelectOption};
pub use toast::{toast_response, Toast, ToastType, TOAST_CONTAINER};
pub use spinner::Spinner;
pub use upload::Upload;
pub use pagination::Pagination;
pub use table::{Table, TableColumn, TableField, TableFieldType};
pub use selector::Selector;
pub use field::{Field, FieldType};
pub use row::{Row, RowColumn, RowField};
pub use editor::{Editor, EditorView};
pub use list::List;
pub use search::Search;
pub use form::Form;
pub use sidebar::{SideBar, SideBarElement, SideBarGroup, SideBarItem, SideBarState, SideBarStatic, SideBarVisibility};
pub use menubar::{MenuBar, MenuBarItem};
pub use inputbox::{InputBox, InputBoxType};
pub use application::Application;
