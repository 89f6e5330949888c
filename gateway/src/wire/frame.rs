//! Outgoing/incoming message ids, trimmed from `api/src/enums.rs`'s
//! `Outgoing`/`Incoming` enums to the subset spec.md's endpoints use —
//! values are the real IB API message ids, kept so a real TWS connection
//! recognizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outgoing {
    ReqMktData = 1,
    CancelMktData = 2,
    PlaceOrder = 3,
    CancelOrder = 4,
    ReqOpenOrders = 5,
    ReqAccountData = 6,
    ReqIds = 8,
    ReqAllOpenOrders = 16,
    ReqHistoricalData = 20,
    CancelHistoricalData = 25,
    ReqPositions = 61,
    ReqAccountSummary = 62,
    CancelAccountSummary = 63,
    CancelPositions = 64,
    StartApi = 71,
}

impl Outgoing {
    pub fn id(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incoming {
    TickPrice = 1,
    TickSize = 2,
    OrderStatus = 3,
    ErrMsg = 4,
    OpenOrder = 5,
    AcctValue = 6,
    PortfolioValue = 7,
    AcctUpdateTime = 8,
    NextValidId = 9,
    ManagedAccts = 15,
    HistoricalData = 17,
    OpenOrderEnd = 53,
    AcctDownloadEnd = 54,
    PositionData = 61,
    PositionEnd = 62,
    AccountSummary = 63,
    AccountSummaryEnd = 64,
}

impl Incoming {
    pub fn from_id(id: i32) -> Option<Self> {
        Some(match id {
            1 => Incoming::TickPrice,
            2 => Incoming::TickSize,
            3 => Incoming::OrderStatus,
            4 => Incoming::ErrMsg,
            5 => Incoming::OpenOrder,
            6 => Incoming::AcctValue,
            7 => Incoming::PortfolioValue,
            8 => Incoming::AcctUpdateTime,
            9 => Incoming::NextValidId,
            15 => Incoming::ManagedAccts,
            17 => Incoming::HistoricalData,
            53 => Incoming::OpenOrderEnd,
            54 => Incoming::AcctDownloadEnd,
            61 => Incoming::PositionData,
            62 => Incoming::PositionEnd,
            63 => Incoming::AccountSummary,
            64 => Incoming::AccountSummaryEnd,
            _ => return None,
        })
    }
}
