use dioxus::prelude::*;
use epyl_ui::domain::Section;
use epyl_ui::domain::config::SiteConfig;
use epyl_ui::domain::content::{EVENTS, PROGRAMS, RESOURCES};
use epyl_ui::{Page, PageProps};

fn render(config: SiteConfig) -> String {
    let mut dom = VirtualDom::new_with_props(Page, PageProps::builder().config(config).build());
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}

fn render_default() -> String {
    render(SiteConfig::default())
}

#[test]
fn sections_render_in_page_order() {
    let html = render_default();

    let positions: Vec<usize> = Section::ALL
        .iter()
        .map(|section| {
            let needle = format!("id=\"{}\"", section.id());
            html.find(&needle).unwrap_or_else(|| panic!("missing section {section}"))
        })
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "order: {positions:?}");
}

#[test]
fn navigation_lists_every_label_with_home_active() {
    let html = render_default();

    for section in Section::ALL {
        assert!(html.contains(section.label()), "missing label {}", section.label());
    }

    assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
    let start = html.find("aria-current=\"true\"").unwrap();
    let end = start + html[start..].find("</button>").unwrap();
    assert!(html[start..end].contains("Inicio"));
}

#[test]
fn mobile_menu_is_closed_on_first_render() {
    let html = render_default();

    assert!(!html.contains("mobile-menu"));
    assert!(html.contains("Toggle Menu"));
}

#[test]
fn cards_carry_the_page_copy() {
    let html = render_default();

    for program in PROGRAMS {
        assert!(html.contains(program.title));
        assert!(html.contains(program.description));
    }
    for event in EVENTS {
        assert!(html.contains(event.title));
        assert!(html.contains(event.date));
        assert!(html.contains(event.location));
    }
    for resource in RESOURCES {
        assert!(html.contains(resource.title));
    }
    assert!(html.contains("Tipo: PDF | 2.5 MB"));
    assert!(html.contains("Tipo: Video | 1h 15min"));

    for heading in ["Sobre Nosotros", "Próximos Eventos", "Contribuye a Nuestra Misión", "Contáctanos"] {
        assert!(html.contains(heading), "missing heading {heading}");
    }
    for button in ["Más Información", "Inscribirse", "Donar Ahora", "Descargar", "Enviar Mensaje"] {
        assert!(html.contains(button), "missing button {button}");
    }
}

#[test]
fn hero_links_point_at_sections() {
    let html = render_default();

    assert!(html.contains("href=\"#contribute\""));
    assert!(html.contains("href=\"#programs\""));
    assert!(html.contains("Contribuir Ahora"));
}

#[test]
fn carousel_starts_on_first_slide() {
    let html = render_default();

    assert!(html.contains("EPYL Imagen 1"));
    assert!(html.contains("EPYL Imagen 3"));
    assert!(html.contains("translateX(-0%)"));
}

#[test]
fn footer_uses_configured_site_and_social_links() {
    let mut config = SiteConfig::default();
    config.site.name = "EPYL Perú".to_owned();
    config.social.youtube = "https://youtube.com/@epyl".to_owned();

    let html = render(config);

    assert!(html.contains("© 2023 EPYL Perú. Todos los derechos reservados."));
    assert!(html.contains("https://youtube.com/@epyl"));
    assert!(html.contains("aria-label=\"YouTube\""));
}
