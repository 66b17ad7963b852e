use std::collections::HashMap;
use haven_core::listing::{Address, Offers, PropertyRecord, ReviewRecord};

#[allow(clippy::too_many_arguments)]
fn property(
    name: &str,
    (state, city, country): (&str, &str, &str),
    rating: f32,
    category: &[&str],
    price: u32,
    (bed, shower, occupants): (&str, &str, &str),
    image: &str,
    discount: u32,
) -> PropertyRecord {
    PropertyRecord {
        name: name.to_string(),
        address: Address {
            state: state.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        },
        rating,
        category: category.iter().map(|c| c.to_string()).collect(),
        price,
        offers: Offers {
            bed: bed.to_string(),
            shower: shower.to_string(),
            occupants: occupants.to_string(),
        },
        image: image.to_string(),
        discount,
    }
}

fn review(id: u32, author: &str, rating: f32, comment: &str, date: &str, avatar: Option<&str>) -> ReviewRecord {
    ReviewRecord {
        id,
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
        avatar: avatar.map(str::to_string),
    }
}

pub fn properties() -> Vec<PropertyRecord> {
    vec![
        property(
            "Villa Ocean Breeze",
            ("Seminyak", "Bali", "Indonesia"),
            4.89,
            &["Luxury Villa", "Pool", "Free Parking"],
            3200,
            ("3", "3", "4-6"),
            "https://example.com/image1.jpg",
            0,
        ),
        property(
            "Mountain Escape Chalet",
            ("Colorado", "Aspen", "USA"),
            4.7,
            &["Mountain View", "Fireplace", "Self Checkin"],
            1800,
            ("4", "2", "5-7"),
            "https://example.com/image2.jpg",
            30,
        ),
        property(
            "Cozy Desert Retreat",
            ("Dubai", "Dubai", "UAE"),
            4.5,
            &["Desert View", "Pet Friendly", "Self Checkin"],
            1500,
            ("2", "1", "2-3"),
            "https://example.com/image3.jpg",
            0,
        ),
        property(
            "City Lights Penthouse",
            ("New York", "New York City", "USA"),
            4.85,
            &["City View", "Free WiFi", "Rooftop Pool"],
            4500,
            ("2", "2", "2-4"),
            "https://example.com/image4.jpg",
            15,
        ),
        property(
            "Riverside Cabin",
            ("Ontario", "Muskoka", "Canada"),
            4.6,
            &["Riverfront", "Hot Tub", "Free Parking"],
            1200,
            ("3", "2", "4-6"),
            "https://example.com/image5.jpg",
            20,
        ),
        property(
            "Safari Lodge",
            ("Serengeti", "Serengeti", "Tanzania"),
            4.9,
            &["Wildlife View", "Guided Tours", "Free Breakfast"],
            4000,
            ("5", "4", "8-10"),
            "https://example.com/image6.jpg",
            10,
        ),
    ]
}

/// Reviews keyed by property position. Properties without an entry have none.
pub fn reviews() -> HashMap<usize, Vec<ReviewRecord>> {
    HashMap::from([
        (
            0,
            vec![
                review(
                    1,
                    "Sarah Johnson",
                    5.0,
                    "Absolutely stunning villa! The ocean views were breathtaking and the pool was perfect.",
                    "2024-03-15",
                    Some("https://i.pravatar.cc/150?img=1"),
                ),
                review(
                    2,
                    "Michael Chen",
                    4.5,
                    "Great location and beautiful property. Host was very responsive.",
                    "2024-02-28",
                    Some("https://i.pravatar.cc/150?img=2"),
                ),
            ],
        ),
        (
            1,
            vec![review(
                3,
                "Emma Davis",
                5.0,
                "Perfect mountain getaway. The fireplace made the evenings cozy.",
                "2024-01-20",
                None,
            )],
        ),
        (
            3,
            vec![
                review(
                    4,
                    "James Wilson",
                    4.0,
                    "The skyline at night is unforgettable. A bit noisy on weekends.",
                    "2024-04-02",
                    Some("https://i.pravatar.cc/150?img=4"),
                ),
                review(
                    5,
                    "Priya Patel",
                    5.0,
                    "Spotless penthouse and the rooftop pool is a real highlight.",
                    "2024-04-18",
                    None,
                ),
            ],
        ),
    ])
}
