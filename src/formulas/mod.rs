//! ASME Sec. VIII Div.1 / B31 형식의 두께·압력 폐형식.
//! 압력 psig, 길이 in, 응력 psi. 분모가 0 이하면 `DegenerateFormula`를 돌려준다.

pub mod head;
pub mod piping;
pub mod shell;

pub use head::*;
pub use piping::*;
pub use shell::*;
