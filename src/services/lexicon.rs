// Lexicon
// Curated base terms per category, expanded once into morphological variants

use tracing::info;

use crate::models::Category;
use crate::services::text_normalizer::Normalizer;

// ============ Morphological rule sets ============

const DIMINUTIVES: &[&str] = &[
    "ito", "ita", "illo", "illa", "ico", "ica", "in", "ina",
    "ete", "eta", "uelo", "uela", "cito", "cita",
];

const AUGMENTATIVES: &[&str] = &[
    "ón", "ona", "azo", "aza", "ote", "ota", "arro", "arra",
    "orro", "orra", "ucho", "ucha", "ejo", "eja", "aco", "aca",
];

const PREFIXES: &[&str] = &[
    "super", "hiper", "mega", "ultra", "archi", "requete",
    "re", "contra", "extra",
];

/// How many leading suffixes of each list combine with prefixes.
const COMBINED_SUFFIXES: usize = 5;

// ============ Curated base lists ============

const SEXIST_TERMS: &[&str] = &[
    // sexualized insults
    "puta", "zorra", "golfa", "perra", "ramera", "prostituta",
    "furcia", "guarra", "facilona", "cualquiera", "arrastrada",
    "callejera", "cuero", "gata", "yegua", "fulana",
    // lgbtq+ slurs
    "maricón", "marica", "mariquita", "joto", "puto",
    "gay", "g4y", "gei", "afeminado", "nenaza", "nena",
    "loca", "pluma", "tortillera", "bollera", "marimacho",
    "machona", "lesbiana", "lesbi", "travesti", "traba",
    "trans", "transexual", "tranny",
    // gendered stereotypes
    "histérica", "bruja", "arpía", "víbora", "serpiente",
    "mamona", "culona", "tetona", "ninfómana", "caliente",
];

const SEXIST_PHRASES: &[&str] = &[
    "losalumnos", "losninos", "loshombres", "todosestan",
    "portatecomohombre", "llorascomonina", "cosasdemujeres",
    "cosasdehombres", "trabajodemujeres",
];

const ABLEIST_TERMS: &[&str] = &[
    // intellectual disability
    "retrasado", "retardado", "subnormal", "mongólico", "mongolio",
    "down", "anormal", "deficiente", "imbécil", "cretino",
    "tarado", "lerdo", "minusválido", "inválido", "impedido",
    // mental health
    "loco", "demente", "perturbado", "trastornado", "chalado",
    "chiflado", "pirado", "psicópata", "sociópata", "esquizofrénico",
    "paranoico", "bipolar", "autista", "asperger", "zafado",
    "desquiciado", "majareta", "tocado", "orate",
    // physical ability
    "cojo", "manco", "tuerto", "ciego", "sordo", "mudo",
    "paralítico", "tullido", "jorobado", "contrahecho",
    // intelligence
    "tonto", "bobo", "idiota", "estúpido", "torpe",
    "inútil", "burro", "bruto", "bestia", "animal",
    "ignorante", "analfabeto", "necio", "obtuso",
];

const ABLEIST_PHRASES: &[&str] = &[
    "estoesdelocos", "quelocura", "estoylocoo", "estasloco",
    "parecessordo", "parececiego", "tefaltatornillo",
];

const ETHNIC_TERMS: &[&str] = &[
    // racial
    "negro", "negra", "prieto", "moreno", "mayate",
    "mono", "simio", "gorila", "chango",
    // east asian
    "chino", "china", "amarillo", "japo", "coreano",
    "rasgado", "achinado",
    // indigenous
    "indio", "india", "indígena", "salvaje", "primitivo",
    "aborigen", "nativo",
    // latin american
    "sudaca", "sudaco", "bolita", "paragua", "veneco",
    "beaner", "wetback",
    // european / middle eastern
    "gitano", "calorro", "moro", "mora", "musulmán",
    "turco", "paki", "polaco", "árabe",
    // other
    "gringo", "yanqui", "gabacho", "gachupín",
    "extranjero", "forastero", "guiri",
];

const ETHNIC_PHRASES: &[&str] = &[
    "trabajacomonegro", "comonegro", "negrobruto",
    "indiobruto", "indioignorante", "chinodelbarrio",
    "volveratupaís", "invasores",
];

const OFFENSIVE_TERMS: &[&str] = &[
    // general insults
    "pendejo", "cabrón", "hijodeputa", "mamón", "gilipollas",
    "capullo", "desgraciado", "miserable", "infeliz", "fracasado",
    "perdedor", "basura", "escoria", "mierda", "porquería",
    "rata", "cucaracha", "insecto", "gusano", "parásito",
    // vulgar sexual
    "verga", "polla", "pito", "chocha", "concha", "coño",
    "cojones", "culero", "ojete", "chingada", "carajo",
    "huevón", "güey", "wey", "pelotudo", "boludo",
    // body shaming: weight
    "gordo", "gorda", "ballena", "cerdo", "cerda", "marrano",
    "obeso", "chancho", "lechón", "foca", "vaca", "elefante",
    "hipopótamo", "panzon", "barrigón", "gordinflon",
    "flaco", "flaca", "esqueleto", "anoréxico", "raquítico",
    "palillo", "escuálido", "huesos", "vara",
    // body shaming: appearance
    "feo", "fea", "horrible", "horroroso", "monstruo",
    "engendro", "esperpento", "adefesio", "bicho", "deforme",
    "narizón", "ojón", "orejón", "cabezón",
    // height
    "enano", "enana", "petizo", "chaparro", "retaco",
    "tapón", "gigante", "gigantón", "altote",
    // age
    "viejo", "vieja", "anciano", "vejestorio", "carcamal",
    "chocho", "senil", "decrépito", "momia", "fósil",
    "ruco", "carroza", "escuincle", "mocoso", "chamaco",
    // classism
    "pobre", "muerto", "muertohambre", "pelado", "naco",
    "corriente", "vulgar", "ordinario", "roto", "mugroso",
    "mugriento", "sucio", "piojoso", "mendicante", "limosnero",
    "pordiosero", "chusma", "plebe", "populacho",
    // other
    "malparido", "conchudo", "sinvergüenza", "canalla",
    "bellaco", "bribón", "cobarde", "mentecato",
    "baboso", "meco", "guevón", "pajero",
];

const OFFENSIVE_PHRASES: &[&str] = &[
    "valeverga", "mevale", "vetealamierda", "vetealcarajo",
    "pudrete", "muertodehambre", "nosirvesparanada",
];

// ============ Expansion ============

/// All morphological variants of one base form, in generation order.
///
/// Suffixes are concatenated literally to the base with no elision of the
/// final vowel; that over-generation is intentional, the variants only ever
/// feed normalized containment matching.
pub fn generate_variations(base: &str) -> Vec<String> {
    let mut variations = vec![base.to_string()];

    for suffix in DIMINUTIVES.iter().chain(AUGMENTATIVES.iter()) {
        variations.push(format!("{}{}", base, suffix));
    }

    for prefix in PREFIXES {
        variations.push(format!("{}{}", prefix, base));
        for suffix in DIMINUTIVES[..COMBINED_SUFFIXES]
            .iter()
            .chain(AUGMENTATIVES[..COMBINED_SUFFIXES].iter())
        {
            variations.push(format!("{}{}{}", prefix, base, suffix));
        }
    }

    variations.push(format!("{}{}", base, base));
    variations.push(format!("{}s", base));

    // superlatives replace a final o/a, which is always one byte here
    if base.ends_with('o') || base.ends_with('a') {
        let stem = &base[..base.len() - 1];
        variations.push(format!("{}ísimo", stem));
        variations.push(format!("{}ísima", stem));
    }

    variations
}

// ============ Lexicon ============

/// One category's expanded entry lists.
pub struct CategoryLexicon {
    pub category: Category,
    /// Normalized variants, shortest first and lexicographic within a
    /// length. Scan order doubles as the "first entry wins" resolution
    /// order, so a base form always beats its decorated variants.
    pub terms: Vec<String>,
    pub phrases: Vec<String>,
    /// Whether a term match in this category must pass the context
    /// classifier before it is accepted.
    pub context_required: bool,
}

/// Immutable expanded lexicon. Built once per engine instance; read-only
/// afterwards.
pub struct Lexicon {
    categories: Vec<CategoryLexicon>,
}

impl Lexicon {
    pub fn build(normalizer: &Normalizer) -> Self {
        let categories = Category::ORDER
            .iter()
            .map(|&category| {
                let (terms, phrases) = base_lists(category);
                let entry = CategoryLexicon {
                    category,
                    terms: expand_sorted(terms, normalizer),
                    phrases: expand_sorted(phrases, normalizer),
                    context_required: !matches!(category, Category::Offensive),
                };
                info!(
                    "[lexicon] {}: {} base terms -> {} term variants, {} phrase variants",
                    category.as_str(),
                    terms.len(),
                    entry.terms.len(),
                    entry.phrases.len()
                );
                entry
            })
            .collect();

        Self { categories }
    }

    /// Categories in scan order (`Category::ORDER`).
    pub fn categories(&self) -> &[CategoryLexicon] {
        &self.categories
    }

    pub fn term_count(&self) -> usize {
        self.categories.iter().map(|c| c.terms.len()).sum()
    }

    pub fn phrase_count(&self) -> usize {
        self.categories.iter().map(|c| c.phrases.len()).sum()
    }
}

fn base_lists(category: Category) -> (&'static [&'static str], &'static [&'static str]) {
    match category {
        Category::Sexist => (SEXIST_TERMS, SEXIST_PHRASES),
        Category::Ableist => (ABLEIST_TERMS, ABLEIST_PHRASES),
        Category::Ethnic => (ETHNIC_TERMS, ETHNIC_PHRASES),
        Category::Offensive => (OFFENSIVE_TERMS, OFFENSIVE_PHRASES),
    }
}

fn expand_sorted(bases: &[&str], normalizer: &Normalizer) -> Vec<String> {
    let mut variants: Vec<String> = bases
        .iter()
        .flat_map(|base| generate_variations(base))
        .map(|variant| normalizer.normalize(&variant))
        .collect();
    variants.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    variants.dedup();
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variations_include_documented_forms() {
        let v = generate_variations("tonto");
        assert!(v.contains(&"tonto".to_string()));
        // literal concatenation, no vowel elision
        assert!(v.contains(&"tontoito".to_string()));
        assert!(v.contains(&"tontoón".to_string()));
        assert!(v.contains(&"supertonto".to_string()));
        assert!(v.contains(&"supertontoito".to_string()));
        assert!(v.contains(&"tontotonto".to_string()));
        assert!(v.contains(&"tontos".to_string()));
        assert!(v.contains(&"tontísimo".to_string()));
        assert!(v.contains(&"tontísima".to_string()));
    }

    #[test]
    fn test_variation_counts() {
        // 1 base + 30 suffixed + 9 * (1 + 10) prefixed + duplicate + plural
        // + 2 superlatives for vowel-final bases
        assert_eq!(generate_variations("tonto").len(), 134);
        assert_eq!(generate_variations("wey").len(), 132);
    }

    #[test]
    fn test_prefix_combos_use_first_five_suffixes() {
        let v = generate_variations("feo");
        assert!(v.contains(&"megafeoico".to_string()));
        assert!(v.contains(&"megafeoote".to_string()));
        // sixth diminutive and beyond never combine with a prefix
        assert!(!v.contains(&"megafeoica".to_string()));
        assert!(!v.contains(&"megafeoeta".to_string()));
    }

    #[test]
    fn test_base_letters_never_reordered() {
        for variant in generate_variations("bruja") {
            assert!(
                variant.contains("bruja") || variant.starts_with("bruj"),
                "unexpected variant {}",
                variant
            );
        }
    }

    #[test]
    fn test_build_order_and_flags() {
        let normalizer = Normalizer::new();
        let lexicon = Lexicon::build(&normalizer);
        let order: Vec<Category> = lexicon.categories().iter().map(|c| c.category).collect();
        assert_eq!(order.as_slice(), Category::ORDER.as_slice());
        for entry in lexicon.categories() {
            assert_eq!(
                entry.context_required,
                entry.category != Category::Offensive
            );
        }
    }

    #[test]
    fn test_entries_sorted_shortest_first_and_deduped() {
        let normalizer = Normalizer::new();
        let lexicon = Lexicon::build(&normalizer);
        for entry in lexicon.categories() {
            for pair in entry.terms.windows(2) {
                let ordered = pair[0].len() < pair[1].len()
                    || (pair[0].len() == pair[1].len() && pair[0] < pair[1]);
                assert!(ordered, "{} !< {}", pair[0], pair[1]);
            }
        }
        // a base form sorts ahead of every variant derived from it
        let offensive = &lexicon.categories()[3];
        let base = offensive.terms.iter().position(|t| t == "pendejo");
        let prefixed = offensive.terms.iter().position(|t| t == "superpendejo");
        assert!(base.is_some() && prefixed.is_some());
        assert!(base < prefixed);
    }

    #[test]
    fn test_entries_are_stored_normalized() {
        let normalizer = Normalizer::new();
        let lexicon = Lexicon::build(&normalizer);
        for entry in lexicon.categories() {
            for term in entry.terms.iter().chain(entry.phrases.iter()) {
                assert_eq!(&normalizer.normalize(term), term);
            }
        }
    }

    #[test]
    fn test_known_variants_present() {
        let normalizer = Normalizer::new();
        let lexicon = Lexicon::build(&normalizer);
        let offensive = &lexicon.categories()[3];
        assert!(offensive.terms.iter().any(|t| t == "pendejo"));
        assert!(offensive.terms.iter().any(|t| t == "pendejos"));
        assert!(offensive.terms.iter().any(|t| t == "superpendejo"));
        let sexist = &lexicon.categories()[0];
        // accents and look-alikes fold at build time
        assert!(sexist.terms.iter().any(|t| t == "maricon"));
        assert!(sexist.phrases.iter().any(|p| p == "iosaiumnos"));
    }
}
