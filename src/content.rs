//! Copy shown on the page. Everything here is fixed at compile time.

use crate::components::icons::IconKind;

pub const BRAND: &str = "Event Planners";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "Services", anchor: "services" },
    NavItem { label: "Testimonials", anchor: "testimonials" },
    NavItem { label: "About Us", anchor: "about-us" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub const CONTACT_HREF: &str = "#contact";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOffering {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        icon: IconKind::Heart,
        title: "Wedding Planning",
        description: "From the initial consultation to the final dance, we manage every detail to create a magical wedding day.",
    },
    ServiceOffering {
        icon: IconKind::Briefcase,
        title: "Corporate Events",
        description: "Professional planning and flawless execution for conferences, galas, and corporate gatherings that leave a lasting impression.",
    },
    ServiceOffering {
        icon: IconKind::PartyPopper,
        title: "Social Celebrations",
        description: "Customized solutions for birthdays, anniversaries, and private parties that bring joy and elegance to every occasion.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub event: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Event Planners turned our dream wedding into a reality – every detail was handled with care and creativity.",
        author: "Sarah & Michael",
        event: "Wedding",
        image: "https://images.unsplash.com/photo-1623091411395-09e79fdbfcf5?auto=format&fit=crop&q=80&w=200&h=200",
    },
    Testimonial {
        quote: "The corporate gala they organized exceeded all expectations. Truly professional service.",
        author: "James Wilson",
        event: "Corporate Event",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&q=80&w=200&h=200",
    },
    Testimonial {
        quote: "They made my daughter's sweet sixteen absolutely magical. Every guest was impressed!",
        author: "Emily Thompson",
        event: "Social Celebration",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=200&h=200",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: IconKind,
    pub text: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { icon: IconKind::Phone, text: "+1 (555) 123-4567" },
    ContactChannel { icon: IconKind::Mail, text: "contact@eventplanners.com" },
    ContactChannel { icon: IconKind::MapPin, text: "123 Event Street, City, State" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const ABOUT_GALLERY: [GalleryImage; 4] = [
    GalleryImage {
        src: "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?auto=format&fit=crop&q=80&w=300",
        alt: "Event planning",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?auto=format&fit=crop&q=80&w=300",
        alt: "Wedding setup",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?auto=format&fit=crop&q=80&w=300",
        alt: "Corporate event",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?auto=format&fit=crop&q=80&w=300",
        alt: "Social celebration",
    },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1519167758481-83f550bb49b3?auto=format&fit=crop&q=80";

pub const SOCIAL_LINKS: [(IconKind, &str); 3] = [
    (IconKind::Facebook, "Facebook"),
    (IconKind::Instagram, "Instagram"),
    (IconKind::Linkedin, "LinkedIn"),
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Section id for a nav label: lower-cased, first space turned into a dash.
    fn anchor_for(label: &str) -> String {
        label.to_lowercase().replacen(' ', "-", 1)
    }

    #[test]
    fn test_anchor_for_labels() {
        assert_eq!(anchor_for("Home"), "home");
        assert_eq!(anchor_for("About Us"), "about-us");
    }

    #[test]
    fn test_nav_anchors_match_labels() {
        for item in NAV_ITEMS.iter() {
            assert_eq!(item.anchor, anchor_for(item.label));
        }
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, vec!["#home", "#services", "#testimonials", "#about-us", "#contact"]);
    }

    #[test]
    fn test_contact_href_points_at_contact_section() {
        let contact = NAV_ITEMS.iter().find(|item| item.label == "Contact").map(NavItem::href);
        assert_eq!(contact.as_deref(), Some(CONTACT_HREF));
    }

    #[test]
    fn test_testimonial_authors_are_unique() {
        let mut authors: Vec<&str> = TESTIMONIALS.iter().map(|t| t.author).collect();
        authors.sort();
        authors.dedup();
        assert_eq!(authors.len(), TESTIMONIALS.len());
    }
}
