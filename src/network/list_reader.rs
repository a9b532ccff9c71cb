use crate::error::{NetworkError, Result};

/// Left-to-right cursor over a caller-owned list of weights or biases.
///
/// The length check happens up front, so a short list fails before any
/// value is written. Surplus values are left unread.
#[derive(Debug)]
pub struct ListReader<'a> {
    values: &'a [f64],
    position: usize,
}

impl<'a> ListReader<'a> {
    pub fn new(list: &'static str, values: &'a [f64], needed: usize) -> Result<ListReader<'a>> {
        if values.len() < needed {
            return Err(NetworkError::ListExhausted {
                list,
                needed,
                available: values.len(),
            });
        }
        Ok(ListReader { values, position: 0 })
    }

    /// Next unread value. The constructor guarantees enough values for every
    /// slot the network asks for.
    pub fn next_value(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position += 1;
        value
    }

    pub fn consumed(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_order_and_leaves_surplus() {
        let values = [1.0, 2.0, 3.0];
        let mut reader = ListReader::new("weights", &values, 2).unwrap();
        assert_eq!(reader.next_value(), 1.0);
        assert_eq!(reader.next_value(), 2.0);
        assert_eq!(reader.consumed(), 2);
        assert_eq!(values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn short_list_is_rejected() {
        let err = ListReader::new("biases", &[0.35], 4).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ListExhausted { list: "biases", needed: 4, available: 1 }
        ));
    }
}
