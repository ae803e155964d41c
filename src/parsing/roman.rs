//! Reading chapter numbers written as Roman numerals.
//!
//! Service books use only I, V, X and L for chapters and are not always
//! canonical about it, so this is a lenient reader rather than a validator.
//! Each symbol adds a fixed amount to a running total; a subtractive pair
//! like IV is handled by having the larger symbol add less when it follows
//! the smaller one (I adds 1, then V adds 3, giving 4).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Clear,
    AfterOne,
    AfterTen,
}

/// Apply one symbol, returning the amount it contributes and the state to
/// carry on to the next symbol. Characters outside I, V, X, L contribute
/// nothing and leave the state alone.
fn step(state: State, symbol: char) -> (u32, State) {
    match (symbol, state) {
        ('I', _) => (1, State::AfterOne),
        ('V', State::AfterOne) => (3, State::Clear),
        ('V', _) => (5, State::Clear),
        ('X', State::AfterOne) => (8, State::AfterTen),
        ('X', _) => (10, State::AfterTen),
        ('L', State::AfterTen) => (30, State::Clear),
        ('L', _) => (50, State::Clear),
        (_, state) => (0, state),
    }
}

/// Convert a Roman numeral to its value. Malformed numerals are accepted and
/// give a best-effort number; this never fails.
pub fn convert(numeral: &str) -> u32 {
    let mut total: u32 = 0;
    let mut state = State::Clear;

    for symbol in numeral.chars() {
        let (value, next) = step(state, symbol);
        total = total.saturating_add(value);
        state = next;
    }

    total
}
