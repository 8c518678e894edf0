use super::*;

fn make_recipe(id: &str, name: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        category: String::new(),
        image_url: None,
        ingredients: Vec::new(),
        steps: Vec::new(),
    }
}

fn sample_list() -> Vec<Recipe> {
    vec![
        make_recipe("r-1", "Svíčková na smetaně"),
        make_recipe("r-2", "Palačinky"),
        make_recipe("r-3", "Bramborový guláš"),
    ]
}

#[test]
fn blank_query_keeps_everything() {
    let recipes = sample_list();
    assert_eq!(filter_recipes(&recipes, ""), recipes);
    assert_eq!(filter_recipes(&recipes, "   "), recipes);
}

#[test]
fn filter_matches_case_insensitively() {
    let recipes = sample_list();
    let hits = filter_recipes(&recipes, "PALA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "r-2");
}

#[test]
fn filter_matches_inside_the_name() {
    let recipes = sample_list();
    let hits = filter_recipes(&recipes, "guláš");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "r-3");
}

#[test]
fn filter_trims_the_query() {
    let recipes = sample_list();
    let hits = filter_recipes(&recipes, "  palačinky  ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "r-2");
}

#[test]
fn unmatched_query_returns_empty() {
    let recipes = sample_list();
    assert!(filter_recipes(&recipes, "pizza").is_empty());
}

#[test]
fn filter_of_an_empty_list_is_empty() {
    assert!(filter_recipes(&[], "cokoliv").is_empty());
}
