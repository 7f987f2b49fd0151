//! Static copy of the page.
//!
//! Everything the sections render from lives here as `const` tables, so the markup
//! in `epyl-ui` only decides layout.

use std::fmt;

/// Image slot rendered from the placeholder service until real photos exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub photo: Image,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
}

/// How big a downloadable resource is: a file size for documents, a running time for media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceExtent {
    Size(&'static str),
    Duration(&'static str),
}

impl fmt::Display for ResourceExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(size) => f.write_str(size),
            Self::Duration(duration) => f.write_str(duration),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub kind: &'static str,
    pub extent: ResourceExtent,
}

impl Resource {
    /// `Tipo: PDF | 2.5 MB`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Tipo: {} | {}", self.kind, self.extent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Facebook,
    Twitter,
    Instagram,
    YouTube,
}

impl SocialNetwork {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
        }
    }
}

/// Footer order.
pub const SOCIAL_NETWORKS: [SocialNetwork; 4] = [
    SocialNetwork::Facebook,
    SocialNetwork::Twitter,
    SocialNetwork::Instagram,
    SocialNetwork::YouTube,
];

pub const LOGO: Image = Image {
    src: "/placeholder.svg?height=32&width=32",
    alt: "EPYL Logo",
    width: 32,
    height: 32,
};

pub const HERO_SLIDES: [Image; 3] = [
    Image {
        src: "/placeholder.svg?height=400&width=600&text=EPYL+Imagen+1",
        alt: "EPYL Imagen 1",
        width: 600,
        height: 400,
    },
    Image {
        src: "/placeholder.svg?height=400&width=600&text=EPYL+Imagen+2",
        alt: "EPYL Imagen 2",
        width: 600,
        height: 400,
    },
    Image {
        src: "/placeholder.svg?height=400&width=600&text=EPYL+Imagen+3",
        alt: "EPYL Imagen 3",
        width: 600,
        height: 400,
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "EPYL es un ministerio dedicado a equipar y fortalecer a pastores y líderes de la iglesia. \
     Nuestra misión es proporcionar recursos, capacitación y apoyo para el crecimiento espiritual \
     y el desarrollo de habilidades de liderazgo en toda América Latina.",
    "Desde nuestra fundación, hemos trabajado incansablemente para llevar programas de \
     capacitación a diversas localidades, incluyendo Cusco, Puno y otras regiones necesitadas.",
];

const fn member(src: &'static str, alt: &'static str) -> TeamMember {
    TeamMember {
        photo: Image { src, alt, width: 120, height: 120 },
        name: "Nombre Apellido",
        role: "Cargo",
    }
}

pub const TEAM: [TeamMember; 4] = [
    member("/placeholder.svg?height=120&width=120&text=Miembro+1", "Miembro del equipo 1"),
    member("/placeholder.svg?height=120&width=120&text=Miembro+2", "Miembro del equipo 2"),
    member("/placeholder.svg?height=120&width=120&text=Miembro+3", "Miembro del equipo 3"),
    member("/placeholder.svg?height=120&width=120&text=Miembro+4", "Miembro del equipo 4"),
];

pub const PROGRAMS: [Program; 3] = [
    Program {
        title: "Capacitación de Líderes",
        description: "Programa intensivo para desarrollar habilidades de liderazgo en la iglesia.",
    },
    Program {
        title: "Estudios Bíblicos Avanzados",
        description: "Cursos profundos de teología y exégesis bíblica para pastores.",
    },
    Program {
        title: "Mentoría Pastoral",
        description: "Acompañamiento personalizado para pastores jóvenes y experimentados.",
    },
];

pub const EVENTS: [Event; 6] = [
    Event {
        title: "Campamento para Jóvenes Líderes",
        date: "15-17 Agosto, 2023",
        location: "Cusco, Perú",
    },
    Event {
        title: "Conferencia de Liderazgo Pastoral",
        date: "5-7 Septiembre, 2023",
        location: "Lima, Perú",
    },
    Event { title: "Taller de Predicación Expositiva", date: "20 Octubre, 2023", location: "Online" },
    Event {
        title: "Retiro de Pastores",
        date: "10-12 Noviembre, 2023",
        location: "Arequipa, Perú",
    },
    Event { title: "Seminario de Consejería Bíblica", date: "1 Diciembre, 2023", location: "Online" },
    Event {
        title: "Conferencia de Misiones",
        date: "15-17 Enero, 2024",
        location: "Trujillo, Perú",
    },
];

pub const CONTRIBUTE_COPY: &str = "Tu generosidad nos permite continuar equipando a pastores y \
     líderes en toda América Latina. Cada donación marca la diferencia en la vida de aquellos que \
     sirven a la iglesia.";

pub const RESOURCES: [Resource; 6] = [
    Resource {
        title: "Guía de Estudio Bíblico",
        kind: "PDF",
        extent: ResourceExtent::Size("2.5 MB"),
    },
    Resource {
        title: "Curso de Liderazgo Cristiano",
        kind: "Video",
        extent: ResourceExtent::Duration("2h 30min"),
    },
    Resource {
        title: "Plantillas para Sermones",
        kind: "DOCX",
        extent: ResourceExtent::Size("500 KB"),
    },
    Resource {
        title: "Podcast: Desafíos Pastorales",
        kind: "Audio",
        extent: ResourceExtent::Duration("45min"),
    },
    Resource {
        title: "Ebook: Fundamentos de la Fe",
        kind: "EPUB",
        extent: ResourceExtent::Size("1.2 MB"),
    },
    Resource {
        title: "Webinar: Evangelismo Moderno",
        kind: "Video",
        extent: ResourceExtent::Duration("1h 15min"),
    },
];
