use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action after it has been checked against the seat's stack.
///
/// Amounts are chips moved from the stack by the action, except `Raise`,
/// which carries only the increment above the call portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

/// Validates a player action according to betting rules and stack size.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`], enforcing poker
/// betting rules, minimum raise amounts, and all-in logic when the player
/// doesn't have enough chips.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `to_call` - Amount needed to call the current bet
/// * `min_raise` - Minimum allowed raise amount (typically previous raise size)
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::InsufficientChips`] - Player tries to check when facing a bet
/// - [`GameError::InvalidBetAmount`] - Bet/raise amount is below minimum or zero
///
/// # Examples
///
/// ```
/// use tablestakes_engine::rules::{validate_action, ValidatedAction};
/// use tablestakes_engine::player::PlayerAction;
///
/// // Valid call with sufficient stack
/// let result = validate_action(1000, 50, 100, PlayerAction::Call);
/// assert!(matches!(result, Ok(ValidatedAction::Call(50))));
///
/// // All-in when stack is insufficient for full raise
/// let result = validate_action(80, 50, 100, PlayerAction::Raise(100));
/// assert!(matches!(result, Ok(ValidatedAction::AllIn(80))));
/// ```
pub fn validate_action(
    stack: u32,
    to_call: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InsufficientChips)
            }
        }
        A::Call => {
            if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
            }
            if amount.saturating_add(to_call) >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else if amount < min_raise {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: min_raise,
                })
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::Raise(amount) => {
            if amount.saturating_add(to_call) >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else if amount < min_raise {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: min_raise,
                })
            } else {
                Ok(ValidatedAction::Raise(amount))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(stack)),
    }
}

/// Table-stakes conversion used by the engine for strategy decisions. Never fails.
///
/// - a check facing a bet becomes a fold; [`crate::game::GameState`] lets a
///   blind that faces nothing above the big blind check through instead
/// - a call the stack cannot cover becomes a call for the whole stack
/// - a raise the stack cannot cover becomes an all-in for the stack
/// - an under-minimum raise is lifted to `min_raise`
/// - a seat whose action was not reopened (`can_raise == false`) may only call or fold
///
/// ```
/// use tablestakes_engine::rules::{normalize_action, ValidatedAction};
/// use tablestakes_engine::player::PlayerAction;
///
/// // energy 5 facing a call of 10 calls all-in for 5, never folds
/// assert_eq!(normalize_action(5, 10, 10, true, PlayerAction::Call), ValidatedAction::Call(5));
/// ```
pub fn normalize_action(
    stack: u32,
    to_call: u32,
    min_raise: u32,
    can_raise: bool,
    action: A,
) -> ValidatedAction {
    let call = || {
        if to_call == 0 {
            ValidatedAction::Check
        } else {
            ValidatedAction::Call(to_call.min(stack))
        }
    };
    if stack == 0 {
        return if to_call == 0 {
            ValidatedAction::Check
        } else {
            ValidatedAction::Fold
        };
    }
    match action {
        A::Fold => ValidatedAction::Fold,
        A::Check if to_call == 0 => ValidatedAction::Check,
        A::Check => ValidatedAction::Fold,
        A::Call => call(),
        A::Bet(0) | A::Raise(0) => call(),
        A::Bet(_) | A::Raise(_) | A::AllIn if !can_raise => call(),
        A::Bet(amount) | A::Raise(amount) => {
            let increment = amount.max(min_raise.max(1));
            if to_call.saturating_add(increment) >= stack {
                ValidatedAction::AllIn(stack)
            } else if to_call == 0 {
                ValidatedAction::Bet(increment)
            } else {
                ValidatedAction::Raise(increment)
            }
        }
        A::AllIn => ValidatedAction::AllIn(stack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_facing_bet_folds() {
        assert_eq!(
            normalize_action(100, 10, 10, true, A::Check),
            ValidatedAction::Fold
        );
    }

    #[test]
    fn call_with_nothing_owed_is_check() {
        assert_eq!(
            normalize_action(100, 0, 10, true, A::Call),
            ValidatedAction::Check
        );
    }

    #[test]
    fn short_raise_is_lifted_to_minimum() {
        assert_eq!(
            normalize_action(500, 10, 20, true, A::Raise(5)),
            ValidatedAction::Raise(20)
        );
    }

    #[test]
    fn raise_exceeding_stack_goes_all_in() {
        assert_eq!(
            normalize_action(50, 10, 20, true, A::Raise(100)),
            ValidatedAction::AllIn(50)
        );
    }

    #[test]
    fn short_stack_call_is_partial_call() {
        assert_eq!(
            normalize_action(5, 10, 10, true, A::Call),
            ValidatedAction::Call(5)
        );
    }

    #[test]
    fn closed_action_cannot_raise() {
        assert_eq!(
            normalize_action(500, 10, 20, false, A::Raise(40)),
            ValidatedAction::Call(10)
        );
        assert_eq!(
            normalize_action(500, 10, 20, false, A::AllIn),
            ValidatedAction::Call(10)
        );
    }
}
