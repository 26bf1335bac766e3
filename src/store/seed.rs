//! Records loaded into a freshly seeded catalog

use crate::model::{Author, Ingredient, Recipe};

pub fn authors() -> Vec<Author> {
    vec![Author {
        id: "1".into(),
        name: "Luis".into(),
        mail: "lfresnog@gmail.com".into(),
    }]
}

pub fn ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient { id: "1".into(), name: "Tomate".into() },
        Ingredient { id: "2".into(), name: "Lechuga".into() },
    ]
}

pub fn recipes() -> Vec<Recipe> {
    vec![Recipe {
        id: "1".into(),
        title: "Ensalada".into(),
        description: "Ensalada tradicional".into(),
        date: "02/04/2014".into(),
        author: "1".into(),
        ingredients: vec!["1".into(), "2".into()],
    }]
}
