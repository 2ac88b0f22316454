/// Contribution categories shown to members, in display order
pub const CONTRIBUTION_CATEGORIES: &[&str] = &[
    "Dizimos",
    "Ofertas",
    "Ofertas Missionarias",
    "Campanhas",
    "Eventos",
    "Venda Materiais",
    "Doacoes Empresas",
    "Parcerias Ongs",
    "Apoio Outras Igrejas",
    "Investimentos",
];

pub fn default_contribution_categories() -> Vec<String> {
    CONTRIBUTION_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
