pub mod ib_message {
    use std::{convert::TryInto, str::FromStr};

    use rust_decimal::prelude::*;

    pub trait IBMessage {
        fn to_ib_message(&self) -> Result<Vec<u8>, std::num::TryFromIntError>;
    }

    impl IBMessage for &str {
        fn to_ib_message(&self) -> Result<Vec<u8>, std::num::TryFromIntError> {
            let msg_len: u32 = self.len().try_into()?;
            let len_bytes = msg_len.to_be_bytes();
            let mut res = Vec::with_capacity(self.len() + 4);
            res.extend_from_slice(&len_bytes);
            res.extend_from_slice(self.as_bytes());
            Ok(res)
        }
    }

    pub type Result<T, E = IbDecodeError> = std::result::Result<T, E>;

    #[derive(Debug, thiserror::Error)]
    pub enum IbDecodeError {
        #[error("Unknown decimal value: '{1}'")]
        UnknownDecimal(#[source] rust_decimal::Error, Box<str>),

        #[error("Unknown string: '{}'", _0)]
        UnknownString(Box<str>),

        #[error("Unknown bool value: '{}'", _0)]
        UnknownBool(Box<str>),
    }

    pub trait Decodable
    where
        Self: FromStr + Sized,
    {
        fn decode_str(val: &str) -> Result<Self, IbDecodeError> {
            Self::from_str(val).map_or_else(|_| Err(IbDecodeError::UnknownString(val.into())), Ok)
        }
    }

    impl Decodable for i32 {}
    impl Decodable for u32 {}
    impl Decodable for usize {}
    impl Decodable for isize {}
    impl Decodable for f64 {}
    impl Decodable for Decimal {
        fn decode_str(val: &str) -> Result<Self, IbDecodeError> {
            match Decimal::from_str(val) {
                Ok(decimal) => Ok(decimal),
                Err(_) => Decimal::from_scientific(val)
                    .map_err(|e| IbDecodeError::UnknownDecimal(e, val.into())),
            }
        }
    }

    impl Decodable for String {}
    impl Decodable for i64 {}

    impl Decodable for bool {
        fn decode_str(val: &str) -> Result<Self, IbDecodeError> {
            match val {
                "" | "0" => Ok(false),
                "1" => Ok(true),
                &_ => Err(IbDecodeError::UnknownBool(val.into())),
            }
        }
    }

    pub fn decode<T>(stream: &mut std::str::Split<'_, char>) -> Result<Option<T>, IbDecodeError>
    where
        T: FromStr + Sized + Decodable,
        <T as FromStr>::Err: std::fmt::Debug,
    {
        let str_val = stream.next().unwrap_or_default();
        match str_val {
            "" => Ok(None),
            _ => T::decode_str(str_val).map(Some),
        }
    }

    pub trait Encodable {
        fn encode(&self) -> String;
    }

    impl Encodable for f64 {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }
    impl Encodable for i32 {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }
    impl Encodable for i64 {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }
    impl Encodable for Decimal {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }
    impl Encodable for usize {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }
    impl Encodable for String {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }
    impl Encodable for &str {
        fn encode(&self) -> String { self.to_string() + "\0" }
    }

    impl Encodable for bool {
        fn encode(&self) -> String {
            if *self {
                "1\0".to_string()
            } else {
                "0\0".to_string()
            }
        }
    }

    impl<T: Encodable> Encodable for Option<T> {
        fn encode(&self) -> String {
            match self {
                Some(val) => val.encode(),
                None => "\0".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::prelude::*;
    use rust_decimal_macros::dec;

    use crate::utils::ib_message::*;

    #[test]
    fn decode_decimal() {
        let val = "1234.3";
        let decimal: Decimal = Decimal::decode_str(val).unwrap();
        assert_eq!(dec!(1234.3), decimal, "Decimal conversion");
        let val = "7.55E-4";
        let decimal: Decimal = Decimal::decode_str(val).unwrap();
        assert_eq!(dec!(0.000755), decimal, "Decimal conversion");
    }

    #[test]
    fn decode_bool() {
        assert!(!bool::decode_str("0").unwrap());
        assert!(bool::decode_str("1").unwrap());
        assert!(bool::decode_str("").unwrap().eq(&false));
    }
}
