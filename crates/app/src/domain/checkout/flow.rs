//! Split-payment state machine.

use std::num::NonZeroUsize;

use crate::{
    domain::{
        carts::models::Cart,
        checkout::{
            errors::CheckoutError,
            models::{
                CardDetails, CheckoutState, MAX_PAYERS, PayerSplit, PendingCheckout,
                PendingPayment,
            },
        },
        orders::models::TransactionId,
        payments::models::PaymentMethod,
    },
    money::split_evenly,
};

/// One user's checkout: a snapshot of their cart and how the bill is split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFlow {
    cart: Cart,
    payers: Vec<PayerSplit>,
    state: CheckoutState,
}

fn even_split(total: u64, payers: usize) -> Vec<PayerSplit> {
    let payers = NonZeroUsize::new(payers.clamp(1, MAX_PAYERS)).unwrap_or(NonZeroUsize::MIN);

    split_evenly(total, payers)
        .into_iter()
        .map(PayerSplit::new)
        .collect()
}

impl CheckoutFlow {
    /// Start checking out `cart` with a single payer covering the total.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart has no lines.
    pub fn new(cart: Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            payers: even_split(cart.total(), 1),
            cart,
            state: CheckoutState::Editing,
        })
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    #[must_use]
    pub fn payers(&self) -> &[PayerSplit] {
        &self.payers
    }

    #[must_use]
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    fn ensure_editable(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::Editing => Ok(()),
            CheckoutState::Failed { .. } => {
                self.state = CheckoutState::Editing;

                Ok(())
            }
            CheckoutState::Validating | CheckoutState::Submitting { .. } => {
                Err(CheckoutError::SubmissionInProgress)
            }
            CheckoutState::Succeeded { .. } => Err(CheckoutError::AlreadyCompleted),
        }
    }

    fn payer_mut(&mut self, index: usize) -> Result<&mut PayerSplit, CheckoutError> {
        let payers = self.payers.len();

        self.payers
            .get_mut(index)
            .ok_or(CheckoutError::PayerOutOfRange { index, payers })
    }

    /// Re-split the total evenly across `count` payers (at least one, at most
    /// [`MAX_PAYERS`]). Every payer goes back to paying by card with empty
    /// card details.
    ///
    /// # Errors
    ///
    /// Fails when the checkout is no longer editable.
    pub fn set_num_clients(&mut self, count: usize) -> Result<(), CheckoutError> {
        self.ensure_editable()?;

        self.payers = even_split(self.total(), count);

        Ok(())
    }

    /// Overwrite one payer's amount. Other payers are left untouched.
    ///
    /// # Errors
    ///
    /// Fails for unknown payers or when the checkout is no longer editable.
    pub fn set_split_amount(&mut self, index: usize, amount: u64) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.payer_mut(index)?.amount = amount;

        Ok(())
    }

    /// # Errors
    ///
    /// Fails for unknown payers or when the checkout is no longer editable.
    pub fn set_payment_method(
        &mut self,
        index: usize,
        method: PaymentMethod,
    ) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.payer_mut(index)?.method = method;

        Ok(())
    }

    /// # Errors
    ///
    /// Fails for unknown payers or when the checkout is no longer editable.
    pub fn set_card_details(
        &mut self,
        index: usize,
        details: CardDetails,
    ) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.payer_mut(index)?.card = details;

        Ok(())
    }

    fn check(&self) -> Result<(), CheckoutError> {
        let expected = self.total();
        let actual = self
            .payers
            .iter()
            .fold(0_u64, |sum, payer| sum.saturating_add(payer.amount));

        if actual != expected {
            return Err(CheckoutError::SplitMismatch { expected, actual });
        }

        for (payer, split) in self.payers.iter().enumerate() {
            if split.method != PaymentMethod::Card {
                continue;
            }

            let fields = split.card.missing_fields();

            if !fields.is_empty() {
                return Err(CheckoutError::MissingCardDetails { payer, fields });
            }
        }

        Ok(())
    }

    /// Check that the split reconciles with the total and that every card
    /// payer filled in their card. The checkout stays editable either way.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&mut self) -> Result<(), CheckoutError> {
        self.ensure_editable()?;

        self.state = CheckoutState::Validating;

        let result = self.check();

        self.state = CheckoutState::Editing;

        result
    }

    /// Validate and move to `Submitting`, returning what must be written.
    ///
    /// `current` is the user's cart right now; it must still match the cart
    /// the checkout was started with.
    ///
    /// # Errors
    ///
    /// Fails when the checkout is not editable, the cart changed, or
    /// validation fails. The state is left unchanged apart from a failed
    /// checkout returning to `Editing`.
    pub fn begin_submit(&mut self, current: &Cart) -> Result<PendingCheckout, CheckoutError> {
        self.ensure_editable()?;

        if current != &self.cart {
            return Err(CheckoutError::CartChanged);
        }

        self.validate()?;

        let transaction_id = TransactionId::new();

        self.state = CheckoutState::Submitting { transaction_id };

        Ok(PendingCheckout {
            transaction_id,
            items: self.cart.lines().to_vec(),
            total: self.total(),
            payments: self
                .payers
                .iter()
                .map(|payer| PendingPayment {
                    amount: payer.amount,
                    method: payer.method,
                    card: (payer.method == PaymentMethod::Card).then(|| payer.card.to_stored()),
                })
                .collect(),
        })
    }

    /// Record the outcome of the writes started by [`Self::begin_submit`].
    pub fn complete(&mut self, outcome: Result<(), String>) {
        let CheckoutState::Submitting { transaction_id } = self.state else {
            return;
        };

        self.state = match outcome {
            Ok(()) => CheckoutState::Succeeded { transaction_id },
            Err(reason) => CheckoutState::Failed { reason },
        };
    }
}
