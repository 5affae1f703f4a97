pub mod black_scholes;
pub mod implied_vol;

use serde::Serialize;

/// European exercise side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    #[inline]
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionKind::Call
        } else {
            OptionKind::Put
        }
    }

    /// Payoff at expiry for a terminal price.
    #[inline]
    pub fn payoff(self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (terminal - strike).max(0.0),
            OptionKind::Put => (strike - terminal).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Black-Scholes inputs. Stack-allocated, Copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionParams {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl OptionParams {
    pub fn new(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        }
    }

    /// Spot, strike, expiry and volatility all strictly positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0 && self.strike > 0.0 && self.time_to_expiry > 0.0 && self.volatility > 0.0
    }

    /// (d1, d2). Only meaningful when `is_valid()`.
    #[inline]
    pub fn d1_d2(&self) -> (f64, f64) {
        let sigma_sqrt_t = self.volatility * self.time_to_expiry.sqrt();
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * self.time_to_expiry)
            / sigma_sqrt_t;
        (d1, d1 - sigma_sqrt_t)
    }

    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time_to_expiry).exp()
    }
}
