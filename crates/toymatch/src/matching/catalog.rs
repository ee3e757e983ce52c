use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{AgeRange, Gender, Product};

const LIST_SEPARATOR: char = '|';

/// Source of the products a search ranks. Implementations hand out a snapshot per call.
pub trait CatalogProvider: Send + Sync {
    fn products(&self) -> Result<Vec<Product>, CatalogError>;
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidAgeRange { id: String, min: u32, max: u32 },
    Unavailable(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read product catalog: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid product catalog CSV: {}", err),
            CatalogError::InvalidAgeRange { id, min, max } => write!(
                f,
                "product {} has an inverted age range {}-{}",
                id, min, max
            ),
            CatalogError::Unavailable(reason) => {
                write!(f, "product catalog unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::InvalidAgeRange { .. } | CatalogError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// In-memory catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's seed products.
    pub fn sample() -> Self {
        Self::new(vec![
            Product {
                id: "1".to_string(),
                name: "لگو آموزشی ریاضی".to_string(),
                category: "آموزشی".to_string(),
                age_range: AgeRange { min: 6, max: 10 },
                gender: Gender::Unisex,
                skills: vec!["ریاضی".into(), "منطق".into(), "خلاقیت".into()],
                tags: vec!["آموزشی".into(), "ریاضی".into(), "لگو".into()],
                price: 250_000,
            },
            Product {
                id: "2".to_string(),
                name: "عروسک باربی".to_string(),
                category: "عروسک".to_string(),
                age_range: AgeRange { min: 3, max: 8 },
                gender: Gender::Female,
                skills: vec!["تخیل".into(), "اجتماعی".into()],
                tags: vec!["عروسک".into(), "دخترانه".into(), "باربی".into()],
                price: 180_000,
            },
            Product {
                id: "3".to_string(),
                name: "ماشین کنترلی".to_string(),
                category: "ماشین کنترلی".to_string(),
                age_range: AgeRange { min: 5, max: 12 },
                gender: Gender::Male,
                skills: vec!["هماهنگی".into(), "سرعت".into(), "کنترل".into()],
                tags: vec!["ماشین".into(), "کنترلی".into(), "پسرانه".into()],
                price: 320_000,
            },
        ])
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads `id,name,category,age_min,age_max,gender,skills,tags,price` rows, with
    /// `skills` and `tags` separated by `|`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut products = Vec::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            products.push(record?.into_product()?);
        }

        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogProvider for ProductCatalog {
    fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    age_min: u32,
    age_max: u32,
    gender: Gender,
    #[serde(default, deserialize_with = "separated_list")]
    skills: Vec<String>,
    #[serde(default, deserialize_with = "separated_list")]
    tags: Vec<String>,
    price: u64,
}

impl CatalogRow {
    fn into_product(self) -> Result<Product, CatalogError> {
        if self.age_min > self.age_max {
            return Err(CatalogError::InvalidAgeRange {
                id: self.id,
                min: self.age_min,
                max: self.age_max,
            });
        }

        Ok(Product {
            id: self.id,
            name: self.name,
            category: self.category,
            age_range: AgeRange {
                min: self.age_min,
                max: self.age_max,
            },
            gender: self.gender,
            skills: self.skills,
            tags: self.tags,
            price: self.price,
        })
    }
}

fn separated_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,name,category,age_min,age_max,gender,skills,tags,price\n";

    #[test]
    fn parses_pipe_separated_attributes() {
        let csv = format!(
            "{HEADER}7,پازل چوبی,پازل,3,6,unisex,منطق | خلاقیت,پازل|ساختن,95000\n"
        );

        let catalog = ProductCatalog::from_csv_reader(Cursor::new(csv)).expect("catalog parses");

        let product = &catalog.as_slice()[0];
        assert_eq!(product.id, "7");
        assert_eq!(product.age_range, AgeRange { min: 3, max: 6 });
        assert_eq!(product.gender, Gender::Unisex);
        assert_eq!(product.skills, vec!["منطق", "خلاقیت"]);
        assert_eq!(product.tags, vec!["پازل", "ساختن"]);
        assert_eq!(product.price, 95_000);
    }

    #[test]
    fn empty_attribute_cells_yield_empty_lists() {
        let csv = format!("{HEADER}8,توپ,ورزشی,2,9,male,,,40000\n");

        let catalog = ProductCatalog::from_csv_reader(Cursor::new(csv)).expect("catalog parses");

        let product = &catalog.as_slice()[0];
        assert!(product.skills.is_empty());
        assert!(product.tags.is_empty());
    }

    #[test]
    fn rejects_inverted_age_ranges() {
        let csv = format!("{HEADER}9,بادبادک,بیرونی,10,4,unisex,حرکتی,طبیعت,60000\n");

        let err = ProductCatalog::from_csv_reader(Cursor::new(csv)).expect_err("inverted range");

        assert!(matches!(
            err,
            CatalogError::InvalidAgeRange { ref id, min: 10, max: 4 } if id == "9"
        ));
    }

    #[test]
    fn rejects_unknown_gender() {
        let csv = format!("{HEADER}10,قطار,ماشین,3,7,robot,,,70000\n");

        let err = ProductCatalog::from_csv_reader(Cursor::new(csv)).expect_err("bad gender");

        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn sample_catalog_matches_storefront_seed() {
        let catalog = ProductCatalog::sample();

        assert_eq!(catalog.len(), 3);
        let ids: Vec<&str> = catalog
            .as_slice()
            .iter()
            .map(|product| product.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
