//! Checkout Validation
//!
//! Turns a raw checkout payload into a [`NewOrder`]. Everything here runs
//! before the first write, so a rejected payload leaves no trace.

use kernel::email::Email;
use rust_decimal::Decimal;

use crate::domain::entities::{CustomerDetails, NewOrder, NewOrderItem, OrderTotals, PaymentDetails};
use crate::domain::value_objects::parse_money;
use crate::error::{OrderError, OrderResult};

/// Checkout payload as received; amounts are still text
#[derive(Debug, Clone, Default)]
pub struct CheckoutInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub subtotal: Option<String>,
    pub shipping: Option<String>,
    pub tax: Option<String>,
    pub total: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub payment_reference: Option<String>,
    pub cart: Vec<CartLineInput>,
}

/// One cart entry as received
#[derive(Debug, Clone, Default)]
pub struct CartLineInput {
    pub product_id: Option<String>,
    pub name: String,
    /// Missing means 1
    pub quantity: Option<i64>,
    pub price: Option<String>,
    pub images: Vec<String>,
}

impl CheckoutInput {
    pub fn validate(self) -> OrderResult<NewOrder> {
        let totals = OrderTotals {
            subtotal: amount("subtotal", self.subtotal.as_deref())?,
            shipping: amount("shipping", self.shipping.as_deref())?,
            tax: amount("tax", self.tax.as_deref())?,
            total: amount("total", self.total.as_deref())?,
        };
        let sum = totals
            .subtotal
            .checked_add(totals.shipping)
            .and_then(|s| s.checked_add(totals.tax))
            .ok_or_else(|| OrderError::ValidationFailed("totals are out of range".to_string()))?;
        if totals.total != sum {
            return Err(OrderError::ValidationFailed(
                "total must equal subtotal + shipping + tax".to_string(),
            ));
        }

        let email = Email::new(self.email)
            .map_err(|e| OrderError::ValidationFailed(e.message().to_string()))?;

        let items = self
            .cart
            .into_iter()
            .enumerate()
            .map(|(i, line)| line.validate(i + 1))
            .collect::<OrderResult<Vec<_>>>()?;

        Ok(NewOrder {
            customer: CustomerDetails {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email,
                phone: self.phone.trim().to_string(),
                address: self.address.trim().to_string(),
                postal_code: self.postal_code.trim().to_string(),
            },
            totals,
            payment: PaymentDetails {
                method: non_blank(self.payment_method),
                status: non_blank(self.payment_status),
                reference: non_blank(self.payment_reference),
            },
            items,
        })
    }
}

impl CartLineInput {
    fn validate(self, position: usize) -> OrderResult<NewOrderItem> {
        let malformed = |reason: &'static str| OrderError::MalformedLineItem { position, reason };

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(malformed("name is required"));
        }

        let quantity = match self.quantity {
            None => 1,
            Some(q) if q > 0 => i32::try_from(q).map_err(|_| malformed("quantity is too large"))?,
            Some(_) => return Err(malformed("quantity must be positive")),
        };

        let unit_price = self
            .price
            .as_deref()
            .and_then(parse_money)
            .ok_or_else(|| malformed("price is not a valid amount"))?;
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(malformed("price must not be negative"));
        }
        if !fits_money_column(unit_price) {
            return Err(malformed("price is out of range"));
        }

        Ok(NewOrderItem {
            product_id: non_blank(self.product_id),
            name,
            quantity,
            unit_price,
            image_url: self.images.into_iter().next().unwrap_or_default(),
        })
    }
}

fn amount(field: &str, raw: Option<&str>) -> OrderResult<Decimal> {
    let raw = raw.ok_or_else(|| OrderError::ValidationFailed(format!("{field} is required")))?;
    let value = parse_money(raw)
        .ok_or_else(|| OrderError::ValidationFailed(format!("{field} must be a number")))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(OrderError::ValidationFailed(format!(
            "{field} must not be negative"
        )));
    }
    if !fits_money_column(value) {
        return Err(OrderError::ValidationFailed(format!(
            "{field} is out of range"
        )));
    }
    Ok(value)
}

/// Money columns are `NUMERIC(12,2)`: at most two decimals, below 10^10
fn fits_money_column(value: Decimal) -> bool {
    value.normalize().scale() <= MONEY_SCALE && value.abs() < Decimal::from(MONEY_LIMIT)
}

const MONEY_SCALE: u32 = 2;
const MONEY_LIMIT: i64 = 10_000_000_000;

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(name: &str, qty: Option<i64>, price: &str) -> CartLineInput {
        CartLineInput {
            product_id: Some("1".to_string()),
            name: name.to_string(),
            quantity: qty,
            price: Some(price.to_string()),
            images: vec![],
        }
    }

    fn input(cart: Vec<CartLineInput>) -> CheckoutInput {
        CheckoutInput {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            subtotal: Some("200".to_string()),
            shipping: Some("50".to_string()),
            tax: Some("36".to_string()),
            total: Some("286".to_string()),
            cart,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_checkout() {
        let mut cart = vec![line("Mug", Some(2), "₹100")];
        cart[0].images = vec!["a.png".to_string(), "b.png".to_string()];
        let order = input(cart).validate().unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].unit_price, Decimal::from(100));
        assert_eq!(order.items[0].image_url, "a.png");
        assert_eq!(order.totals.total, Decimal::from(286));
    }

    #[test]
    fn test_empty_cart_is_permitted() {
        let order = input(vec![]).validate().unwrap();
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_quantity_defaults_to_one_and_image_to_empty() {
        let order = input(vec![line("Mug", None, "100")]).validate().unwrap();
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.items[0].image_url, "");
    }

    #[test]
    fn test_bad_price_reports_position() {
        let cart = vec![line("Mug", Some(2), "₹100"), line("Plate", Some(1), "bad")];
        let err = input(cart).validate().unwrap_err();
        assert!(matches!(
            err,
            OrderError::MalformedLineItem { position: 2, .. }
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = input(vec![line("Mug", Some(1), "-5")]).validate().unwrap_err();
        assert!(matches!(err, OrderError::MalformedLineItem { position: 1, .. }));
    }

    #[test]
    fn test_missing_price_rejected() {
        let mut cart = vec![line("Mug", Some(1), "1")];
        cart[0].price = None;
        assert!(input(cart).validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_quantity_and_name_rules() {
        let err = input(vec![line("Mug", Some(0), "1")]).validate().unwrap_err();
        assert!(matches!(err, OrderError::MalformedLineItem { .. }));
        let err = input(vec![line("  ", Some(1), "1")]).validate().unwrap_err();
        assert!(matches!(err, OrderError::MalformedLineItem { .. }));
        let err = input(vec![line("Mug", Some(i64::MAX), "1")])
            .validate()
            .unwrap_err();
        assert!(matches!(err, OrderError::MalformedLineItem { .. }));
    }

    #[test]
    fn test_total_mismatch_rejected() {
        let mut i = input(vec![]);
        i.total = Some("285.99".to_string());
        assert!(matches!(
            i.validate().unwrap_err(),
            OrderError::ValidationFailed(_)
        ));
    }

    #[test]
    fn test_overflowing_totals_rejected() {
        let mut i = input(vec![]);
        i.subtotal = Some("79228162514264337593543950335".to_string());
        i.shipping = Some("79228162514264337593543950335".to_string());
        i.tax = Some("0".to_string());
        i.total = Some("1".to_string());
        assert!(matches!(
            i.validate().unwrap_err(),
            OrderError::ValidationFailed(_)
        ));
    }

    #[test]
    fn test_totals_must_fit_money_columns() {
        let mut i = input(vec![]);
        i.subtotal = Some("0.005".to_string());
        i.shipping = Some("0.005".to_string());
        i.tax = Some("0".to_string());
        i.total = Some("0.010".to_string());
        assert!(matches!(
            i.validate().unwrap_err(),
            OrderError::ValidationFailed(_)
        ));

        let mut i = input(vec![]);
        i.subtotal = Some("10000000000".to_string());
        i.shipping = Some("0".to_string());
        i.tax = Some("0".to_string());
        i.total = Some("10000000000".to_string());
        assert!(matches!(
            i.validate().unwrap_err(),
            OrderError::ValidationFailed(_)
        ));

        // trailing zeros are not extra precision
        let mut i = input(vec![]);
        i.subtotal = Some("200.000".to_string());
        assert!(i.validate().is_ok());
    }

    #[test]
    fn test_price_must_fit_money_column() {
        let err = input(vec![line("Mug", Some(1), "12345678901234.999")])
            .validate()
            .unwrap_err();
        assert!(matches!(err, OrderError::MalformedLineItem { position: 1, .. }));
        let err = input(vec![line("Mug", Some(1), "1.999")]).validate().unwrap_err();
        assert!(matches!(err, OrderError::MalformedLineItem { position: 1, .. }));
        assert!(input(vec![line("Mug", Some(1), "9999999999.99")]).validate().is_ok());
    }

    #[test]
    fn test_totals_compare_by_value() {
        let mut i = input(vec![]);
        i.subtotal = Some("200.00".to_string());
        i.total = Some("286.0".to_string());
        assert_eq!(
            i.validate().unwrap().totals.subtotal,
            Decimal::from_str("200").unwrap()
        );
    }

    #[test]
    fn test_missing_or_negative_totals_rejected() {
        let mut i = input(vec![]);
        i.tax = None;
        assert!(matches!(i.validate(), Err(OrderError::ValidationFailed(_))));

        let mut i = input(vec![]);
        i.shipping = Some("-50".to_string());
        i.subtotal = Some("300".to_string());
        assert!(matches!(i.validate(), Err(OrderError::ValidationFailed(_))));
    }

    #[test]
    fn test_email_required() {
        let mut i = input(vec![]);
        i.email = String::new();
        assert!(matches!(i.validate(), Err(OrderError::ValidationFailed(_))));
    }
}
