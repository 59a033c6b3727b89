use super::order::{CustomerId, Order};

/// Chart point derived from a single order.
#[derive(Clone, Debug, PartialEq)]
pub struct RevenuePoint {
    pub customer_id: CustomerId,
    pub revenue: f64,
}

/// One point per order, in order. Repeated customer ids are not merged.
pub fn compute_revenue(orders: &[Order]) -> Vec<RevenuePoint> {
    orders
        .iter()
        .map(|order| RevenuePoint {
            customer_id: order.customer_id.clone(),
            revenue: order.revenue(),
        })
        .collect()
}

/// Splits points into category labels and values for the bar chart.
pub fn series_data(points: &[RevenuePoint]) -> (Vec<String>, Vec<f64>) {
    points
        .iter()
        .map(|p| (p.customer_id.to_string(), p.revenue))
        .unzip()
}
