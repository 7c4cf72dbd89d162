//! The built-in twelve-item dataset served when no catalog file is configured.

use crate::models::Item;

fn item(
    id: i64,
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    image_url: &str,
) -> Item {
    Item {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        image_url: image_url.to_string(),
    }
}

/// The built-in catalog, in catalog order (ids 1 through 12).
pub fn builtin_items() -> Vec<Item> {
    vec![
        item(
            1,
            "Wireless Headphones",
            "Premium noise-cancelling wireless headphones with 30-hour battery life",
            "Electronics",
            199.99,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop",
        ),
        item(
            2,
            "Minimalist Desk Lamp",
            "Sleek LED desk lamp with adjustable brightness and color temperature",
            "Furniture",
            79.99,
            "https://images.unsplash.com/photo-1565636192335-14c46fa1120d?w=400&h=300&fit=crop",
        ),
        item(
            3,
            "Organic Coffee Beans",
            "Single-origin Ethiopian coffee beans with rich, complex flavor notes",
            "Food & Beverage",
            24.99,
            "https://images.unsplash.com/photo-1559056199-641a0ac8b3f4?w=400&h=300&fit=crop",
        ),
        item(
            4,
            "Yoga Mat Pro",
            "Non-slip yoga mat with carrying strap, perfect for home or studio practice",
            "Sports & Fitness",
            49.99,
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=400&h=300&fit=crop",
        ),
        item(
            5,
            "Stainless Steel Water Bottle",
            "Insulated water bottle keeps drinks cold for 24 hours or hot for 12 hours",
            "Sports & Fitness",
            34.99,
            "https://images.unsplash.com/photo-1602143407151-7e36dd5f5a0e?w=400&h=300&fit=crop",
        ),
        item(
            6,
            "Mechanical Keyboard",
            "RGB mechanical keyboard with custom switches and programmable keys",
            "Electronics",
            149.99,
            "https://images.unsplash.com/photo-1587829191301-4a71490d63d2?w=400&h=300&fit=crop",
        ),
        item(
            7,
            "Bamboo Cutting Board Set",
            "Three-piece bamboo cutting board set with natural antimicrobial properties",
            "Kitchen",
            39.99,
            "https://images.unsplash.com/photo-1610701596007-11502861dcfa?w=400&h=300&fit=crop",
        ),
        item(
            8,
            "Portable Bluetooth Speaker",
            "Waterproof portable speaker with 360-degree sound and 12-hour battery",
            "Electronics",
            89.99,
            "https://images.unsplash.com/photo-1589003077984-894e133da26d?w=400&h=300&fit=crop",
        ),
        item(
            9,
            "Linen Bedding Set",
            "Premium Egyptian linen bedding set with natural temperature regulation",
            "Home & Decor",
            129.99,
            "https://images.unsplash.com/photo-1578500494198-246f612d03b3?w=400&h=300&fit=crop",
        ),
        item(
            10,
            "Ceramic Plant Pot",
            "Handcrafted ceramic plant pot with drainage hole and minimalist design",
            "Home & Decor",
            29.99,
            "https://images.unsplash.com/photo-1578482326433-ad12cb7d050f?w=400&h=300&fit=crop",
        ),
        item(
            11,
            "Leather Notebook",
            "Premium leather-bound notebook with 200 pages of quality paper",
            "Stationery",
            44.99,
            "https://images.unsplash.com/photo-1507842217343-583f20270319?w=400&h=300&fit=crop",
        ),
        item(
            12,
            "Aromatic Candle",
            "Hand-poured soy candle with natural essential oils and 40-hour burn time",
            "Home & Decor",
            32.99,
            "https://images.unsplash.com/photo-1608571423902-eed4a5ad8108?w=400&h=300&fit=crop",
        ),
    ]
}
