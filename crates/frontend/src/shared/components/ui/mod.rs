pub mod checkbox;
pub mod radio;
pub mod select;

pub use checkbox::{Checkbox, CheckboxGroup};
pub use radio::{Radio, RadioGroup};
pub use select::Select;
