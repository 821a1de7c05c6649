use crate::OperationCost;

/// Wrapped operation result with associated cost.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// Wrapped operation's return value.
    pub value: T,
    /// Cost of the operation.
    pub cost: OperationCost,
}

/// General combinators for `CostContext`.
impl<T> CostContext<T> {
    /// Take wrapped value out adding its cost to provided accumulator.
    pub fn unwrap_add_cost(self, acc_cost: &mut OperationCost) -> T {
        *acc_cost += self.cost;
        self.value
    }

    /// Take wrapped value out dropping cost data.
    pub fn unwrap(self) -> T {
        self.value
    }

    /// Borrow costs data.
    pub fn cost(&self) -> &OperationCost {
        &self.cost
    }

    /// Borrow wrapped data.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Applies function to wrapped value keeping cost the same as before.
    pub fn map<B>(self, f: impl FnOnce(T) -> B) -> CostContext<B> {
        CostContext {
            value: f(self.value),
            cost: self.cost,
        }
    }

    /// Applies function to wrapped value adding costs.
    pub fn flat_map<B>(self, f: impl FnOnce(T) -> CostContext<B>) -> CostContext<B> {
        let mut cost = self.cost;
        let value = f(self.value).unwrap_add_cost(&mut cost);
        CostContext { value, cost }
    }

    /// Adds previously accumulated cost
    pub fn add_cost(mut self, cost: OperationCost) -> Self {
        self.cost += cost;
        self
    }
}

/// Type alias for `Result` wrapped into `CostContext`.
pub type CostResult<T, E> = CostContext<Result<T, E>>;

/// Combinators to use with `Result` wrapped in `CostContext`.
impl<T, E> CostResult<T, E> {
    /// Applies function to wrapped value in case of `Ok` keeping cost the same
    /// as before.
    pub fn map_ok<B>(self, f: impl FnOnce(T) -> B) -> CostResult<B, E> {
        self.map(|result| result.map(f))
    }

    /// Applies function to wrapped value in case of `Err` keeping cost the same
    /// as before.
    pub fn map_err<B>(self, f: impl FnOnce(E) -> B) -> CostResult<T, B> {
        self.map(|result| result.map_err(f))
    }

    /// Applies function to wrapped result in case of `Ok` adding costs.
    pub fn flat_map_ok<B>(self, f: impl FnOnce(T) -> CostResult<B, E>) -> CostResult<B, E> {
        let mut cost = self.cost;
        let value = match self.value {
            Ok(x) => f(x).unwrap_add_cost(&mut cost),
            Err(e) => Err(e),
        };
        CostContext { value, cost }
    }
}

/// Extension trait to add costs context to values.
pub trait CostsExt {
    /// Wraps any value into a `CostContext` object with provided costs.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self>
    where
        Self: Sized,
    {
        CostContext { value: self, cost }
    }

    /// Wraps any value into `CostContext` object with costs computed using the
    /// value getting wrapped.
    fn wrap_fn_cost(self, f: impl FnOnce(&Self) -> OperationCost) -> CostContext<Self>
    where
        Self: Sized,
    {
        CostContext {
            cost: f(&self),
            value: self,
        }
    }
}

impl<T> CostsExt for T {}

/// Works like `?` on a `CostResult`: the cost is folded into the accumulator
/// `$cost`, and on `Err` the function returns early carrying everything
/// accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error {
    ( &mut $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result_with_cost = { $($body)+ };
            let result = result_with_cost.unwrap_add_cost(&mut $cost);
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

/// Same as `cost_return_on_error` but for a plain `Result`: nothing is added,
/// the early return carries the costs accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( $cost:expr, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_cost(nodes: u32) -> OperationCost {
        OperationCost {
            hash_node_calls: nodes,
            digest_calls: nodes * 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_map_keeps_cost() {
        let initial = 75u32.wrap_with_cost(node_cost(3));
        let mapped = initial.map(|x| x + 25);
        assert_eq!(mapped, 100u32.wrap_with_cost(node_cost(3)));
    }

    #[test]
    fn test_flat_map_adds_cost() {
        let initial = 75u32.wrap_with_cost(node_cost(3));
        let mapped = initial.flat_map(|x| (x + 25).wrap_with_cost(node_cost(4)));
        assert_eq!(mapped, 100u32.wrap_with_cost(node_cost(7)));
    }

    #[test]
    fn test_flat_map_ok_skips_on_err() {
        let initial: CostResult<usize, &str> = Err("bad").wrap_with_cost(node_cost(1));
        let mapped = initial.flat_map_ok(|x| Ok(x + 1).wrap_with_cost(node_cost(10)));
        assert_eq!(mapped, Err("bad").wrap_with_cost(node_cost(1)));
    }

    #[test]
    fn test_map_err() {
        let initial: CostResult<usize, &str> = Err("bad").wrap_with_cost(node_cost(2));
        let mapped = initial.map_err(|e| e.len());
        assert_eq!(mapped, Err(3).wrap_with_cost(node_cost(2)));
    }

    #[test]
    fn test_wrap_fn_cost() {
        let wrapped = vec![0u8; 64].wrap_fn_cost(|v| OperationCost::for_node_root(v.len()));
        assert_eq!(wrapped.cost().hashed_bytes, 64);
        assert_eq!(wrapped.value().len(), 64);
    }

    fn early_return(fail: bool) -> CostResult<u32, &'static str> {
        let mut cost = OperationCost::default();
        let first = cost_return_on_error!(&mut cost, Ok(1).wrap_with_cost(node_cost(1)));
        let second = cost_return_on_error!(
            &mut cost,
            if fail {
                Err("second").wrap_with_cost(node_cost(2))
            } else {
                Ok(2).wrap_with_cost(node_cost(2))
            }
        );
        cost_return_on_error_no_add!(cost, if fail { Err("unreachable") } else { Ok(()) });
        Ok(first + second).wrap_with_cost(cost)
    }

    #[test]
    fn test_cost_return_on_error_keeps_accumulated_cost() {
        assert_eq!(early_return(false), Ok(3).wrap_with_cost(node_cost(3)));
        assert_eq!(early_return(true), Err("second").wrap_with_cost(node_cost(3)));
    }
}
