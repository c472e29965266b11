/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Stress,
    Length,
    Temperature,
}
