//! Schema description of the operation surface, in SDL notation

pub const SCHEMA_SDL: &str = r#"type Recipe {
    id: ID!
    title: String!
    description: String!
    date: String!
    author: Author
    ingredients: [Ingredient!]!
}

type Author {
    id: ID!
    name: String!
    mail: String!
    recipes: [Recipe!]!
}

type Ingredient {
    id: ID!
    name: String!
    recipes: [Recipe!]!
}

type Query {
    recipes: [Recipe!]!
    authors: [Author!]!
    ingredients: [Ingredient!]!
    authorRecipes(name: String!): [Recipe!]!
    ingredientRecipes(name: String!): [Recipe!]!
}

type Mutation {
    addRecipe(title: String!, description: String!, mail: String!, ingredients: [String!]!): Recipe!
    addAuthor(name: String!, mail: String!): Author!
    addIngredient(name: String!): Ingredient!
    deleteRecipe(title: String!): String!
    deleteAuthor(name: String!): String!
    deleteIngredient(name: String!): String!
    updateAuthor(name: String!, newName: String, newMail: String): String!
    updateIngredient(name: String!, newName: String!): String!
}
"#;
