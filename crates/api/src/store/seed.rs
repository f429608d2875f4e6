//! Demo catalog loaded at startup.

use mercato_core::Price;

use crate::models::ProductInput;

const IMAGE_PARAMS: &str = "auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

fn pexels(photo_id: u32) -> String {
    format!("https://images.pexels.com/photos/{photo_id}/pexels-photo-{photo_id}.jpeg?{IMAGE_PARAMS}")
}

fn product(
    name: &str,
    cents: u32,
    photo_id: u32,
    description: &str,
    category: &str,
) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image: pexels(photo_id),
        category: category.to_string(),
    }
}

/// The eight demo products, in id order (`"1"` to `"8"`).
pub fn demo_products() -> Vec<ProductInput> {
    vec![
        product(
            "Premium Wireless Headphones",
            12999,
            3_394_650,
            "Experience immersive sound with our premium wireless headphones. Featuring advanced noise cancellation technology, these headphones deliver crystal-clear audio for up to 30 hours on a single charge.",
            "Electronics",
        ),
        product(
            "Ergonomic Office Chair",
            24999,
            1_957_478,
            "Upgrade your workspace with our ergonomic office chair. Designed for all-day comfort, this chair features adjustable lumbar support, breathable mesh backing, and customizable height and tilt settings.",
            "Furniture",
        ),
        product(
            "Smart Fitness Watch",
            8999,
            437_037,
            "Take control of your fitness journey with our smart fitness watch. Track your workouts, monitor your heart rate, analyze your sleep patterns, and receive notifications\u{2014}all from your wrist.",
            "Electronics",
        ),
        product(
            "Organic Cotton T-Shirt",
            2499,
            5_698_851,
            "Feel good in our organic cotton t-shirt. Made from 100% sustainably sourced cotton, this shirt is soft, breathable, and kind to the environment.",
            "Clothing",
        ),
        product(
            "Stainless Steel Water Bottle",
            1999,
            4_000_090,
            "Double-walled insulation keeps drinks cold for 24 hours or hot for 12 hours.",
            "Kitchen",
        ),
        product(
            "Leather Messenger Bag",
            7999,
            1_152_077,
            "Handcrafted genuine leather bag with multiple compartments.",
            "Accessories",
        ),
        product(
            "Ceramic Plant Pot",
            3499,
            1_084_199,
            "Minimalist design perfect for indoor plants and home decor.",
            "Home",
        ),
        product(
            "Wireless Charging Pad",
            2999,
            4_526_407,
            "Fast charging compatible with all Qi-enabled devices.",
            "Electronics",
        ),
    ]
}
