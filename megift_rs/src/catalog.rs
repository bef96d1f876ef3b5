//! Static page content.
//!
//! Every list on the landing page is an ordered, immutable slice of plain
//! records. Components receive the records and never reach back into this
//! module, so copy changes stay in one place.

/// Static asset paths served from the site root.
pub mod assets {
    /// Header logo (white)
    pub const LOGO: &str = "/logo.png";
    /// Footer logo (pink)
    pub const LOGO_PINK: &str = "/logo-rosa.png";
    /// Small app icon inside the pre-registration button
    pub const APP_ICON: &str = "/icons/icon-48x48.png";
    /// Floating coin next to the phone mockup
    pub const COIN: &str = "/megift-coin.png";
    /// Home screen capture used by the mockup and the showcase
    pub const HOME_SCREEN: &str = "/screens/home-mobile.png";
}

/// Icon drawn in a feature tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureIcon {
    /// Wrapped present
    Gift,
    /// Group of people
    Users,
    /// Calendar page
    Calendar,
    /// Shopping bag
    ShoppingBag,
    /// Medal
    Medal,
    /// Heart
    Heart,
}

/// One tile of the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops for the icon badge
    pub gradient: &'static str,
}

/// One step of "Como Funciona". Numbered by position, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// A beta user quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Seed passed to the avatar service
    pub avatar_seed: &'static str,
}

impl Testimonial {
    /// Avatar image URL for this author on the given avatar service.
    pub fn avatar_url(&self, base_url: &str) -> String {
        format!(
            "{}?seed={}",
            base_url.trim_end_matches(['?', '/']),
            self.avatar_seed
        )
    }
}

/// Which edge of a screenshot is pinned, and the side it slides out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePosition {
    Top,
    Bottom,
}

impl ImagePosition {
    /// CSS `object-position` value.
    pub fn as_css(self) -> &'static str {
        match self {
            ImagePosition::Top => "top",
            ImagePosition::Bottom => "bottom",
        }
    }

    /// Vertical offset, in pixels, of a screen that is not showing.
    pub fn hidden_offset_px(self) -> i32 {
        match self {
            ImagePosition::Top => -100,
            ImagePosition::Bottom => 100,
        }
    }
}

/// A screenshot in the phone mockup carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_position: ImagePosition,
}

/// In-page anchor in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled group of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Funcionalidades",
        href: "#features",
    },
    NavLink {
        label: "Como Funciona",
        href: "#how-it-works",
    },
    NavLink {
        label: "Participar",
        href: "#join",
    },
];

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Gift,
        title: "Listas de Presentes",
        description: "Crie listas personalizadas, adicione itens e compartilhe com amigos e familiares.",
        gradient: "from-pink-500 to-red-500",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "Grupos Sociais",
        description: "Crie e participe de grupos para eventos especiais e planeje presentes em conjunto.",
        gradient: "from-blue-500 to-purple-500",
    },
    Feature {
        icon: FeatureIcon::Calendar,
        title: "Eventos",
        description: "Organize eventos e aniversários e receba notificações de datas importantes.",
        gradient: "from-green-500 to-emerald-500",
    },
    Feature {
        icon: FeatureIcon::ShoppingBag,
        title: "Catálogo de Produtos",
        description: "Explore produtos recomendados e adicione-os diretamente à sua lista de desejos.",
        gradient: "from-yellow-500 to-orange-500",
    },
    Feature {
        icon: FeatureIcon::Medal,
        title: "Missões e Conquistas",
        description: "Complete missões, ganhe pontos e desbloqueie recursos especiais no aplicativo.",
        gradient: "from-purple-500 to-indigo-500",
    },
    Feature {
        icon: FeatureIcon::Heart,
        title: "Megift Stars",
        description: "Apoie seus influenciadores e celebridades favoritos presenteando-os.",
        gradient: "from-red-500 to-pink-500",
    },
];

/// Checklist next to the app showcase.
pub static APP_FEATURES: &[&str] = &[
    "Crie e gerencie múltiplas listas de presentes",
    "Adicione itens de qualquer loja online",
    "Compartilhe suas listas por link ou diretamente no app",
    "Receba notificações de aniversários próximos",
    "Complete missões e ganhe Gift Points",
    "Organize eventos e presentes em grupo",
];

pub static STEPS: &[Step] = &[
    Step {
        title: "Crie sua conta",
        description: "Registre-se gratuitamente e configure seu perfil com seus interesses.",
    },
    Step {
        title: "Crie listas de desejos",
        description: "Adicione produtos que você gostaria de ganhar nas suas listas.",
    },
    Step {
        title: "Compartilhe e receba",
        description: "Compartilhe com amigos e familiares e receba exatamente o que deseja.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "O Megift revolucionou a forma como damos presentes em nossa família. Agora todos sabem exatamente o que dar!",
        author: "Ana Silva",
        role: "Usuária beta",
        avatar_seed: "Ana-Silva",
    },
    Testimonial {
        quote: "Como influenciador, adoro poder conectar com meus seguidores através das listas de presentes. É inovador!",
        author: "Marcos Ribeiro",
        role: "Megift Star",
        avatar_seed: "Marcos-Ribeiro",
    },
    Testimonial {
        quote: "Organizar presentes em grupo nunca foi tão fácil. Usamos para o chá de bebê da minha irmã e foi perfeito!",
        author: "Carolina Lima",
        role: "Usuária beta",
        avatar_seed: "Carolina-Lima",
    },
];

// All four slots reuse the home capture until the other screens are exported.
pub static SCREENS: &[Screen] = &[
    Screen {
        id: 1,
        src: assets::HOME_SCREEN,
        alt: "Tela inicial do Megift",
        title: "Home",
        description: "Sua experiência personalizada de presentes",
        image_position: ImagePosition::Top,
    },
    Screen {
        id: 2,
        src: assets::HOME_SCREEN,
        alt: "Tela de lista de desejos",
        title: "Listas de Desejos",
        description: "Crie e gerencie suas listas de presentes de forma fácil e rápida",
        image_position: ImagePosition::Bottom,
    },
    Screen {
        id: 3,
        src: assets::HOME_SCREEN,
        alt: "Tela de produtos",
        title: "Catálogo de Produtos",
        description: "Explore produtos recomendados e adicione à sua lista",
        image_position: ImagePosition::Top,
    },
    Screen {
        id: 4,
        src: assets::HOME_SCREEN,
        alt: "Tela de conquistas",
        title: "Conquistas",
        description: "Ganhe pontos e desbloqueie recursos especiais",
        image_position: ImagePosition::Bottom,
    },
];

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Produtos",
        links: &["Presentes", "Listas", "Grupos"],
    },
    FooterColumn {
        heading: "Empresa",
        links: &["Sobre", "Blog", "Carreiras"],
    },
    FooterColumn {
        heading: "Suporte",
        links: &["Central de Ajuda", "Contato", "FAQ"],
    },
    FooterColumn {
        heading: "Legal",
        links: &["Privacidade", "Termos", "Cookies"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(APP_FEATURES.len(), 6);
        assert_eq!(STEPS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(SCREENS.len(), 4);
        assert_eq!(NAV_LINKS.len(), 3);
        assert_eq!(FOOTER_COLUMNS.len(), 4);
    }

    #[test]
    fn render_keys_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());

        let icons: HashSet<_> = FEATURES.iter().map(|f| f.icon).collect();
        assert_eq!(icons.len(), FEATURES.len());

        let authors: HashSet<_> = TESTIMONIALS.iter().map(|t| t.author).collect();
        assert_eq!(authors.len(), TESTIMONIALS.len());

        let ids: HashSet<_> = SCREENS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SCREENS.len());
    }

    #[test]
    fn nav_links_target_page_sections() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn avatar_url_uses_seed() {
        let url = TESTIMONIALS[0].avatar_url("https://api.dicebear.com/9.x/avataaars/svg");
        assert_eq!(url, "https://api.dicebear.com/9.x/avataaars/svg?seed=Ana-Silva");

        let trailing = TESTIMONIALS[1].avatar_url("https://avatars.example/svg/");
        assert_eq!(trailing, "https://avatars.example/svg?seed=Marcos-Ribeiro");
    }

    #[test]
    fn screens_alternate_slide_direction() {
        let offsets: Vec<_> = SCREENS
            .iter()
            .map(|s| s.image_position.hidden_offset_px())
            .collect();
        assert_eq!(offsets, vec![-100, 100, -100, 100]);
        assert_eq!(ImagePosition::Bottom.as_css(), "bottom");
    }
}
