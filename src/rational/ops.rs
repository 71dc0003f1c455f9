use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Rational;

fn add(lhs: &Rational, rhs: &Rational) -> Rational {
  if lhs.denom == rhs.denom {
    return Rational {
      numer: &lhs.numer + &rhs.numer,
      denom: lhs.denom.clone(),
    };
  }
  Rational {
    numer: &lhs.numer * &rhs.denom + &rhs.numer * &lhs.denom,
    denom: &lhs.denom * &rhs.denom,
  }
}

fn sub(lhs: &Rational, rhs: &Rational) -> Rational {
  if lhs.denom == rhs.denom {
    return Rational {
      numer: &lhs.numer - &rhs.numer,
      denom: lhs.denom.clone(),
    };
  }
  Rational {
    numer: &lhs.numer * &rhs.denom - &rhs.numer * &lhs.denom,
    denom: &lhs.denom * &rhs.denom,
  }
}

fn mul(lhs: &Rational, rhs: &Rational) -> Rational {
  Rational {
    numer: &lhs.numer * &rhs.numer,
    denom: &lhs.denom * &rhs.denom,
  }
}

// Panics like the integer operators. Use `Rational::checked_div` to get an error instead.
fn div(lhs: &Rational, rhs: &Rational) -> Rational {
  match lhs.checked_div(rhs) {
    Ok(quotient) => quotient,
    Err(_) => panic!("division by zero"),
  }
}

// Implements `$imp` for every combination of owned and borrowed operands.
macro_rules! forward_binop {
  ( $imp:ident, $method:ident, $body:ident ) => {
    impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
      type Output = Rational;
      fn $method(self, rhs: &'b Rational) -> Rational {
        $body(self, rhs)
      }
    }

    impl<'a> $imp<Rational> for &'a Rational {
      type Output = Rational;
      fn $method(self, rhs: Rational) -> Rational {
        $body(self, &rhs)
      }
    }

    impl<'b> $imp<&'b Rational> for Rational {
      type Output = Rational;
      fn $method(self, rhs: &'b Rational) -> Rational {
        $body(&self, rhs)
      }
    }

    impl $imp<Rational> for Rational {
      type Output = Rational;
      fn $method(self, rhs: Rational) -> Rational {
        $body(&self, &rhs)
      }
    }
  };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);
forward_binop!(Div, div, div);

impl Neg for Rational {
  type Output = Rational;
  fn neg(self) -> Rational {
    Rational {
      numer: -self.numer,
      denom: self.denom,
    }
  }
}

impl<'a> Neg for &'a Rational {
  type Output = Rational;
  fn neg(self) -> Rational {
    Rational {
      numer: -&self.numer,
      denom: self.denom.clone(),
    }
  }
}
