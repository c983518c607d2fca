pub const SITE_NAME: &str = "ADR Fitness";
pub const SITE_TAGLINE: &str = "Strength and conditioning coaching in the heart of the city";
pub const CONTACT_EMAIL: &str = "hello@adrfitness.example";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/adrfitness";
