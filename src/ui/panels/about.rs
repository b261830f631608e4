// IncomeScope - ui/panels/about.rs
//
// About dialog: version, repository link, and the "Understanding Wealth
// Inequality" explainer shown above the survey in earlier revisions.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const REPO_URL: &str = "https://github.com/swatto86/IncomeScope";

const EXPLAINER: [&str; 3] = [
    "Wealth inequality refers to the uneven distribution of financial assets, \
     income, and opportunities across different groups in society. While some \
     level of economic disparity is natural, extreme wealth inequality has \
     profound implications for social mobility, economic stability, and \
     political influence.",
    "Wealth inequality arises from multiple factors, including income \
     disparities, generational wealth, access to financial markets, and \
     differences in education quality. The richest 1% of the world owns \
     nearly half of global wealth, while the bottom 50% collectively own less \
     than 2%. Countries with high levels of inequality often experience lower \
     social mobility, making it difficult for individuals from lower-income \
     backgrounds to improve their economic standing.",
    "The consequences of extreme wealth inequality include reduced economic \
     growth, increased social unrest, and disproportionate political \
     influence by the wealthy. Policies such as progressive taxation, \
     universal basic income, and investments in education and healthcare \
     have been proposed as ways to reduce these disparities.",
];

const FURTHER_READING: [&str; 3] = [
    "Piketty, T. (2014). 'Capital in the Twenty-First Century.' Harvard University Press",
    "Stiglitz, J. (2012). 'The Price of Inequality.' W.W. Norton & Company",
    "Credit Suisse Global Wealth Report (2022).",
];

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About IncomeScope")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(420.0)
        .max_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            // Large app name
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("\u{1f4ca}  IncomeScope")
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("An income and demographics survey explorer");
                ui.label("with a filterable Age vs. Income scatterplot.");
            });

            ui.add_space(10.0);
            ui.collapsing("Understanding Wealth Inequality", |ui| {
                for paragraph in EXPLAINER {
                    ui.label(paragraph);
                    ui.add_space(6.0);
                }
                ui.label(egui::RichText::new("For further reading, refer to:").strong());
                for reference in FURTHER_READING {
                    ui.label(egui::RichText::new(reference).small());
                }
            });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.hyperlink_to(REPO_URL, REPO_URL);
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("MIT License \u{00b7} \u{00a9} 2026 Swatto")
                        .small()
                        .weak(),
                );
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
