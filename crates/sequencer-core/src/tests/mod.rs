mod startup;
mod support;
