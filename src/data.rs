//! Static content tables for the single-page site. Every record here is a
//! compile-time fixture; nothing in this module changes at runtime.

use anyhow::{bail, Result};

#[derive(Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// CSS color values, parallel to `color_names`.
    pub colors: &'static [&'static str],
    pub color_names: &'static [&'static str],
    pub price: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub enum GallerySpan {
    Single,
    Wide,
    Tall,
}

impl GallerySpan {
    pub fn class(self) -> &'static str {
        match self {
            GallerySpan::Single => "gallery-span-single",
            GallerySpan::Wide => "gallery-span-wide",
            GallerySpan::Tall => "gallery-span-tall",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub span: GallerySpan,
}

#[derive(Clone, PartialEq)]
pub struct Step {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Shown only while the step is expanded.
    pub details: &'static [&'static str],
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub rating: u32,
    pub avatar: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Classic Bag",
        description: "Our signature tote with elegant structure and timeless appeal. Perfect for everyday elegance.",
        colors: &["#E8B4C8", "#D4C5B9", "#F5F1ED"],
        color_names: &["Rose Pastel", "Warm Beige", "Cream"],
        price: "Starting at $89",
        image: "/images/hero-crochet-bag.jpg",
    },
    Product {
        id: 2,
        name: "Casual Bag",
        description: "A relaxed, versatile style with comfortable handles. Great for weekend adventures.",
        colors: &["#F5F1ED", "#E8B4C8", "#D4C5B9"],
        color_names: &["Cream", "Rose Pastel", "Warm Beige"],
        price: "Starting at $69",
        image: "/images/product-gallery-bags.jpg",
    },
    Product {
        id: 3,
        name: "Mini Bag",
        description: "A delicate, compact style perfect for essentials. Ideal for evening outings.",
        colors: &["#E8B4C8", "#F5F1ED", "#D4C5B9"],
        color_names: &["Rose Pastel", "Cream", "Warm Beige"],
        price: "Starting at $49",
        image: "/images/color-palette-display.jpg",
    },
];

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        src: "/images/crochet-texture-closeup.jpg",
        alt: "Close-up of delicate crochet stitching texture",
        span: GallerySpan::Single,
    },
    GalleryImage {
        id: 2,
        src: "/images/hero-crochet-bag.jpg",
        alt: "Elegant rose pastel handcrafted crochet bag",
        span: GallerySpan::Wide,
    },
    GalleryImage {
        id: 3,
        src: "/images/product-gallery-bags.jpg",
        alt: "Collection of handcrafted bags in different styles",
        span: GallerySpan::Single,
    },
    GalleryImage {
        id: 4,
        src: "/images/color-palette-display.jpg",
        alt: "Yarn and fabric swatches in rose, beige, and cream",
        span: GallerySpan::Single,
    },
    GalleryImage {
        id: 5,
        src: "/images/artisan-workspace.jpg",
        alt: "Artisan workspace with handcrafted materials",
        span: GallerySpan::Wide,
    },
];

pub const STEPS: &[Step] = &[
    Step {
        id: 1,
        title: "Choose Your Style",
        description: "Select from our collection of handcrafted designs or request a custom creation.",
        icon: "\u{2728}",
        details: &["Browse our catalog", "Pick your favorite style", "Or describe your vision"],
    },
    Step {
        id: 2,
        title: "Select Your Colors",
        description: "Pick from our beautiful palette of rose pastel, beige, cream, and more.",
        icon: "\u{1F3A8}",
        details: &["Choose primary color", "Select accent colors", "Mix and match freely"],
    },
    Step {
        id: 3,
        title: "Place Your Order",
        description: "Confirm your choices and place your order through our secure checkout.",
        icon: "\u{1F6CD}\u{FE0F}",
        details: &["Review your design", "Secure payment", "Order confirmation"],
    },
    Step {
        id: 4,
        title: "Handcrafted Creation",
        description: "Our artisan carefully crafts your bag with meticulous attention to detail.",
        icon: "\u{1F9F6}",
        details: &["5-10 days of crafting", "Premium materials", "Quality assurance"],
    },
    Step {
        id: 5,
        title: "Shipped with Care",
        description: "Your finished bag is carefully packaged and shipped to your door.",
        icon: "\u{1F4E6}",
        details: &["Secure packaging", "Tracking provided", "Insured delivery"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Mitchell",
        title: "Fashion Enthusiast",
        quote: "The quality and attention to detail in my Bela Fios bag exceeded all my expectations. It's not just beautiful, it's a work of art that I'll treasure forever.",
        rating: 5,
        avatar: "\u{1F469}",
    },
    Testimonial {
        id: 2,
        name: "Emma Rodriguez",
        title: "Sustainable Fashion Advocate",
        quote: "I love supporting artisans who create with intention. My custom bag arrived perfectly crafted, and the personalized service was exceptional.",
        rating: 5,
        avatar: "\u{1F469}\u{200D}\u{1F9B0}",
    },
    Testimonial {
        id: 3,
        name: "Jessica Chen",
        title: "Luxury Goods Collector",
        quote: "Bela Fios represents true luxury: handmade, timeless, and deeply personal. Every time I carry my bag, I feel the love woven into every stitch.",
        rating: 5,
        avatar: "\u{1F469}\u{200D}\u{1F3A8}",
    },
    Testimonial {
        id: 4,
        name: "Amanda Brooks",
        title: "Interior Designer",
        quote: "The color palette is absolutely stunning. I ordered three bags in different styles, and they've become my go-to accessories for every occasion.",
        rating: 5,
        avatar: "\u{1F469}\u{200D}\u{1F4BC}",
    },
];

/// Checks the fixture tables before the first render. A mismatched color
/// table or an out-of-range rating is a build mistake, so startup refuses
/// to continue rather than render truncated content.
pub fn validate() -> Result<()> {
    for product in PRODUCTS {
        if product.colors.len() != product.color_names.len() {
            bail!(
                "product {} ({}) has {} colors but {} color names",
                product.id,
                product.name,
                product.colors.len(),
                product.color_names.len()
            );
        }
    }
    for testimonial in TESTIMONIALS {
        if testimonial.rating < 1 || testimonial.rating > 5 {
            bail!(
                "testimonial {} ({}) has out-of-range rating {}",
                testimonial.id,
                testimonial.name,
                testimonial.rating
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_color_tables_are_parallel() {
        for product in PRODUCTS {
            assert_eq!(
                product.colors.len(),
                product.color_names.len(),
                "product {} color tables diverge",
                product.name
            );
        }
    }

    #[test]
    fn shipped_tables_pass_validation() {
        assert!(validate().is_ok());
    }

    #[test]
    fn gallery_spans_map_to_fixed_classes() {
        for image in GALLERY_IMAGES {
            let class = image.span.class();
            assert!(
                class == "gallery-span-single"
                    || class == "gallery-span-wide"
                    || class == "gallery-span-tall"
            );
        }
        assert_eq!(GallerySpan::Tall.class(), "gallery-span-tall");
    }

    #[test]
    fn fixture_ids_are_unique_within_each_table() {
        fn unique(ids: Vec<u32>) -> bool {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.len() == ids.len()
        }
        assert!(unique(PRODUCTS.iter().map(|p| p.id).collect()));
        assert!(unique(GALLERY_IMAGES.iter().map(|g| g.id).collect()));
        assert!(unique(STEPS.iter().map(|s| s.id).collect()));
        assert!(unique(TESTIMONIALS.iter().map(|t| t.id).collect()));
    }

    #[test]
    fn every_step_has_expandable_details() {
        for step in STEPS {
            assert!(!step.details.is_empty(), "step {} has no details", step.title);
        }
    }
}
