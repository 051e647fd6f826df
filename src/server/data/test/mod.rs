mod category;
mod outlet;
