use crate::NewProduct;

struct Sample {
    title: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    image_url: &'static str,
    tags: &'static [&'static str],
}

const SAMPLES: [Sample; 6] = [
    Sample {
        title: "Essential Oversized Tee — Onyx",
        description: "Premium heavyweight cotton with a relaxed minimal fit.",
        price: 34.0,
        category: "Minimal",
        image_url: "https://images.unsplash.com/photo-1520975916090-3105956dac38?q=80&w=1200&auto=format&fit=crop",
        tags: &["minimal", "tee", "black"],
    },
    Sample {
        title: "Gradient Hoodie — Cloud",
        description: "Clean lines, subtle branding, ultra-soft fleece.",
        price: 68.0,
        category: "Minimal",
        image_url: "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?q=80&w=1200&auto=format&fit=crop",
        tags: &["minimal", "hoodie"],
    },
    Sample {
        title: "Neon Ronin Tee",
        description: "Anime inspired samurai graphic with neon accents.",
        price: 39.0,
        category: "Anime Inspired",
        image_url: "https://images.unsplash.com/photo-1620799139504-5c1f4f8b2b87?q=80&w=1200&auto=format&fit=crop",
        tags: &["anime", "samurai"],
    },
    Sample {
        title: "Mecha Dreams Hoodie",
        description: "Bold mecha back print, cozy midweight fleece.",
        price: 72.0,
        category: "Anime Inspired",
        image_url: "https://images.unsplash.com/photo-1516826957135-700dedea698c?q=80&w=1200&auto=format&fit=crop",
        tags: &["anime", "mecha"],
    },
    Sample {
        title: "Faith Over Fear Tee",
        description: "Classic type layout with an uplifting message.",
        price: 32.0,
        category: "Christian",
        image_url: "https://images.unsplash.com/photo-1544441893-675973e31985?q=80&w=1200&auto=format&fit=crop",
        tags: &["christian", "message"],
    },
    Sample {
        title: "Cross Embroidered Hoodie",
        description: "Subtle chest embroidery, premium heavyweight.",
        price: 74.0,
        category: "Christian",
        image_url: "https://images.unsplash.com/photo-1503341338985-c0477be52513?q=80&w=1200&auto=format&fit=crop",
        tags: &["christian", "hoodie"],
    },
];

/// The six products posted by "Load sample products", two per category.
pub fn sample_products() -> Vec<NewProduct> {
    SAMPLES
        .iter()
        .map(|sample| NewProduct {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            price: sample.price,
            category: sample.category.to_string(),
            image_url: sample.image_url.to_string(),
            tags: sample.tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}
