//! Price of a configured product.
//!
//! `total = category.base_price + Σ(lettering category price) × amount`.
//! The base price is counted once; each lettering item is charged per unit.
//! Lettering items without a category are free.

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::{
    entity::{
        Categories, LetteringItemCategories, Products, lettering_item_variations,
        product_variations,
    },
    error::{AppError, AppResult},
    services::variation_service::get_all_lettering_items,
};

/// Fails instead of wrapping when the total leaves the `Decimal` range.
pub fn total_price<I>(base_price: Decimal, lettering_prices: I, amount: i32) -> AppResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let lettering = lettering_prices
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, price| acc.checked_add(price));
    lettering
        .and_then(|sum| sum.checked_mul(Decimal::from(amount)))
        .and_then(|per_unit| base_price.checked_add(per_unit))
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "total price out of range (base {base_price}, amount {amount})"
            ))
        })
}

/// Loads everything the price depends on and computes it. Read only.
pub async fn variation_total_price<C: ConnectionTrait>(
    conn: &C,
    variation: &product_variations::Model,
) -> AppResult<Decimal> {
    let base_price = base_price_of_product(conn, variation.product_id).await?;

    let mut prices = Vec::new();
    for item in get_all_lettering_items(conn, variation).await? {
        prices.push(lettering_price(conn, &item).await?);
    }

    total_price(base_price, prices, variation.amount)
}

pub(crate) async fn base_price_of_product<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
) -> AppResult<Decimal> {
    let (_, category) = Products::find_by_id(product_id)
        .find_also_related(Categories)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    let category = category.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("product {product_id} has no category"))
    })?;
    Ok(category.base_price)
}

async fn lettering_price<C: ConnectionTrait>(
    conn: &C,
    item: &lettering_item_variations::Model,
) -> AppResult<Decimal> {
    let Some(category_id) = item.lettering_item_category_id else {
        return Ok(Decimal::ZERO);
    };
    let price = LetteringItemCategories::find_by_id(category_id)
        .one(conn)
        .await?
        .map(|category| category.price)
        .unwrap_or(Decimal::ZERO);
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_only_without_lettering() {
        let total = total_price(Decimal::new(1000, 2), Vec::<Decimal>::new(), 1).expect("total");
        assert_eq!(total, Decimal::new(1000, 2));
    }

    #[test]
    fn lettering_is_charged_per_unit() {
        let prices = [Decimal::new(250, 2), Decimal::new(100, 2)];
        let total = total_price(Decimal::new(1000, 2), prices, 3).expect("total");
        // 10.00 + (2.50 + 1.00) * 3
        assert_eq!(total, Decimal::new(2050, 2));
    }

    #[test]
    fn repeated_calls_agree() {
        let prices = vec![Decimal::new(5, 0)];
        let first = total_price(Decimal::ONE, prices.clone(), 2).expect("total");
        let second = total_price(Decimal::ONE, prices, 2).expect("total");
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_total_is_an_error() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(20), 0);
        let err = total_price(Decimal::ZERO, [huge], i32::MAX).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));

        let err = total_price(Decimal::MAX, [Decimal::ONE], 1).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
