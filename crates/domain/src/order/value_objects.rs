//! Value objects for the shared order domain.

use serde::{Deserialize, Serialize};

use super::OrderError;

/// Display name identifying a participant within an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Creates a participant name from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ParticipantName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ParticipantName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ParticipantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier shared by catalog entries and ledger lines.
///
/// A line copies its id from the catalog entry it was added from, so
/// two lines carry the same id when the same dish is added twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an item ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the item ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Money amount represented in cents to avoid floating point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1899 = $18.99)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * quantity as i64,
        }
    }

    /// Applies a rate given in basis points, rounding half away from
    /// zero to whole cents.
    ///
    /// `scale_bps(800)` is 8% of the amount; `scale_bps(10_800)` is the
    /// amount grown by 8%.
    pub fn scale_bps(&self, rate_bps: u32) -> Money {
        let numerator = self.cents as i128 * rate_bps as i128;
        let denominator = 10_000i128;
        let half = denominator / 2;
        let rounded = if numerator >= 0 {
            (numerator + half) / denominator
        } else {
            -((-numerator + half) / denominator)
        };
        Money {
            cents: rounded as i64,
        }
    }

    /// Splits the amount into `parts` shares that differ by at most one
    /// cent and sum exactly to the original amount.
    ///
    /// Remainder cents go to the earliest shares.
    pub fn split_even(&self, parts: usize) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }
        let n = parts as i64;
        let base = self.cents.div_euclid(n);
        let remainder = self.cents.rem_euclid(n);
        (0..n)
            .map(|i| Money {
                cents: base + i64::from(i < remainder),
            })
            .collect()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents - rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.cents -= rhs.cents;
    }
}

/// Ordered list of outing participants.
///
/// The first entry is the local participant, the only identity whose
/// lines this process may modify. Names are unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster(Vec<ParticipantName>);

impl Roster {
    /// Builds a roster from an ordered list of names.
    ///
    /// Fails on an empty list or a duplicate name.
    pub fn new(names: Vec<ParticipantName>) -> Result<Self, OrderError> {
        if names.is_empty() {
            return Err(OrderError::EmptyRoster);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(OrderError::DuplicateParticipant { name: name.clone() });
            }
        }
        Ok(Self(names))
    }

    /// The local participant (first roster entry).
    pub fn local(&self) -> &ParticipantName {
        &self.0[0]
    }

    /// Returns true if the name is on the roster.
    pub fn contains(&self, name: &ParticipantName) -> bool {
        self.0.contains(name)
    }

    /// All participant names in roster order.
    pub fn names(&self) -> &[ParticipantName] {
        &self.0
    }
}

/// A line in the order ledger.
///
/// Name and price are copied from the catalog at add time so later
/// catalog changes cannot alter a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item identifier, copied from the catalog entry.
    pub id: ItemId,

    /// Human-readable dish name.
    pub name: String,

    /// Price per unit at add time.
    pub unit_price: Money,

    /// Quantity ordered; always at least 1.
    pub quantity: u32,

    /// The participant this line belongs to.
    pub ordered_by: ParticipantName,

    /// Opaque image URI, never interpreted.
    pub image_ref: String,
}

impl LineItem {
    /// Creates a new ledger line.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        ordered_by: impl Into<ParticipantName>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
            ordered_by: ordered_by.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Returns the total price for this line (quantity * unit_price).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Returns true if the line belongs to the given participant.
    pub fn is_owned_by(&self, participant: &ParticipantName) -> bool {
        &self.ordered_by == participant
    }
}
